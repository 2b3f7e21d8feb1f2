// src/noyau/format.rs
//
// Rendu déterministe des expressions :
// - somme    : (a + b), (a - b) si l'opérande droit est négatif, -(…) si le
//              signe est porté par le nœud ;
// - produit  : [a⋅b] ;
// - états    : |a, b⟩ / ⟨a, b|, occupation n > 1 rendue "a:n" ;
// - opérateurs : c_a† / c_a, opérateur générique H / H†.
// Deux expressions structurellement égales ont le même rendu.

use std::fmt;

use super::etats::{Etat, Occupation};
use super::expr::{Entier, Expr, Symbole};
use super::operateurs::Operateur;
use super::signe::Signe;

impl fmt::Display for Signe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signe::Positif => Ok(()),
            Signe::Negatif => f.write_str("-"),
        }
    }
}

impl fmt::Display for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.signe, self.nom)
    }
}

impl fmt::Display for Entier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.signe, self.grandeur)
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nombre == 1 {
            write!(f, "{}", self.symbole)
        } else {
            write!(f, "{}:{}", self.symbole, self.nombre)
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operateur::Generique { nom, dague, signe } => {
                write!(f, "{signe}{nom}")?;
                if *dague {
                    f.write_str("†")?;
                }
                Ok(())
            }
            Operateur::Creation { mode, signe } => write!(f, "{signe}c_{mode}†"),
            Operateur::Annihilation { mode, signe } => write!(f, "{signe}c_{mode}"),
        }
    }
}

impl fmt::Display for Etat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Etat::Ket { occupation, signe } => {
                write!(f, "{signe}|")?;
                ecrit_liste(f, occupation)?;
                f.write_str("⟩")
            }
            Etat::Bra { occupation, signe } => {
                write!(f, "{signe}⟨")?;
                ecrit_liste(f, occupation)?;
                f.write_str("|")
            }
            Etat::FermionKet { modes, signe } => {
                write!(f, "{signe}|")?;
                ecrit_liste(f, modes)?;
                f.write_str("⟩")
            }
            Etat::FermionBra { modes, signe } => {
                write!(f, "{signe}⟨")?;
                ecrit_liste(f, modes)?;
                f.write_str("|")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbole(x) => write!(f, "{x}"),
            Expr::Entier(n) => write!(f, "{n}"),
            Expr::Operateur(op) => write!(f, "{op}"),
            Expr::Etat(e) => write!(f, "{e}"),
            Expr::Somme(g, d, s) => {
                if d.signe().est_negatif() {
                    write!(f, "{s}({g} - {})", d.sans_signe())
                } else {
                    write!(f, "{s}({g} + {d})")
                }
            }
            Expr::Produit(g, d, s) => write!(f, "{s}[{g}⋅{d}]"),
        }
    }
}

fn ecrit_liste<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    Ok(())
}
