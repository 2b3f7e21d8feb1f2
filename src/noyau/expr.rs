// src/noyau/expr.rs
//
// Arbre d'expression exact (seconde quantification).
// - Symbole : coefficient symbolique (E1, J, …)
// - Entier  : entier signé de précision arbitraire (grandeur + signe)
// - Somme / Produit : nœuds binaires, signe propre
// - Operateur / Etat : opérateurs fermioniques, kets/bras de Fock
//
// IMPORTANT :
// - chaque nœud porte son Signe, fixé à la construction (jamais muté) ;
// - les constructeurs `somme`/`produit` normalisent le placement du signe ;
// - l'égalité et le hachage sont structurels et incluent le signe.

use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use super::developpe::{developpe, developpe_complet};
use super::etats::Etat;
use super::operateurs::Operateur;
use super::regroupe::{regroupe, regroupe_complet};
use super::signe::Signe;
use super::simplifie::{simplifie, simplifie_complet};

/* ------------------------ Symbole ------------------------ */

/// Coefficient symbolique. Ordre total par nom (puis signe), utilisé par
/// l'ordre canonique des modes et par l'échange canonique des produits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbole {
    pub nom: String,
    pub signe: Signe,
}

impl Symbole {
    pub fn nouveau(nom: &str) -> Symbole {
        Symbole {
            nom: nom.to_string(),
            signe: Signe::Positif,
        }
    }

    pub fn sans_signe(&self) -> Symbole {
        Symbole {
            nom: self.nom.clone(),
            signe: Signe::Positif,
        }
    }
}

/* ------------------------ Entier ------------------------ */

/// Entier signé : grandeur (BigUint, jamais négative) + signe.
/// Une grandeur nulle se normalise toujours en signe positif.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entier {
    pub grandeur: BigUint,
    pub signe: Signe,
}

impl Entier {
    pub fn nouveau(n: i64) -> Entier {
        Entier {
            grandeur: BigUint::from(n.unsigned_abs()),
            signe: Signe::depuis_entier(n),
        }
    }

    pub fn est_zero(&self) -> bool {
        self.grandeur.is_zero()
    }

    /// Grandeur 1, quel que soit le signe (le signe se replie chez l'appelant).
    pub fn est_un(&self) -> bool {
        self.grandeur.is_one()
    }

    fn en_bigint(&self) -> BigInt {
        let signe = match self.signe {
            Signe::Positif => Sign::Plus,
            Signe::Negatif => Sign::Minus,
        };
        BigInt::from_biguint(signe, self.grandeur.clone())
    }

    fn depuis_bigint(n: BigInt) -> Entier {
        let (signe, grandeur) = n.into_parts();
        Entier {
            grandeur,
            signe: if signe == Sign::Minus {
                Signe::Negatif
            } else {
                Signe::Positif
            },
        }
    }

    pub(crate) fn negatif(self) -> Entier {
        if self.est_zero() {
            // -0 reste +0
            return self;
        }
        Entier {
            grandeur: self.grandeur,
            signe: -self.signe,
        }
    }
}

impl Add for Entier {
    type Output = Entier;

    /// Addition signée : conversion en valeur signée, somme, re-séparation
    /// grandeur + signe.
    fn add(self, rhs: Entier) -> Entier {
        Entier::depuis_bigint(self.en_bigint() + rhs.en_bigint())
    }
}

impl Mul for Entier {
    type Output = Entier;

    fn mul(self, rhs: Entier) -> Entier {
        let grandeur = self.grandeur * rhs.grandeur;
        let signe = if grandeur.is_zero() {
            Signe::Positif
        } else {
            self.signe * rhs.signe
        };
        Entier { grandeur, signe }
    }
}

impl Neg for Entier {
    type Output = Entier;

    fn neg(self) -> Entier {
        self.negatif()
    }
}

impl Zero for Entier {
    fn zero() -> Entier {
        Entier {
            grandeur: BigUint::zero(),
            signe: Signe::Positif,
        }
    }

    fn is_zero(&self) -> bool {
        self.est_zero()
    }
}

impl One for Entier {
    fn one() -> Entier {
        Entier {
            grandeur: BigUint::one(),
            signe: Signe::Positif,
        }
    }
}

/* ------------------------ Expr ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Symbole(Symbole),
    Entier(Entier),
    Somme(Box<Expr>, Box<Expr>, Signe),
    Produit(Box<Expr>, Box<Expr>, Signe),
    Operateur(Operateur),
    Etat(Etat),
}

impl Expr {
    /* ---- constructeurs de feuilles ---- */

    pub fn symbole(nom: &str) -> Expr {
        Expr::Symbole(Symbole::nouveau(nom))
    }

    pub fn entier(n: i64) -> Expr {
        Expr::Entier(Entier::nouveau(n))
    }

    /// Élément absorbant canonique.
    pub fn zero() -> Expr {
        Expr::Entier(Entier::zero())
    }

    /// Élément neutre canonique.
    pub fn un() -> Expr {
        Expr::Entier(Entier::one())
    }

    /// Opérateur de création c†_nom.
    pub fn fd(nom: &str) -> Expr {
        Expr::Operateur(Operateur::creation(Symbole::nouveau(nom)))
    }

    /// Opérateur d'annihilation c_nom.
    pub fn f(nom: &str) -> Expr {
        Expr::Operateur(Operateur::annihilation(Symbole::nouveau(nom)))
    }

    /// Ket fermionique |…⟩ : les modes sont triés immédiatement (signe de la
    /// permutation replié) ; un mode en double donne l'élément zéro
    /// (exclusion de Pauli dès la construction).
    pub fn fermion_ket(noms: &[&str]) -> Expr {
        Etat::fermion_ket(noms.iter().map(|n| Symbole::nouveau(n)).collect())
    }

    /// Bra fermionique ⟨…| (mêmes invariants que le ket).
    pub fn fermion_bra(noms: &[&str]) -> Expr {
        Etat::fermion_bra(noms.iter().map(|n| Symbole::nouveau(n)).collect())
    }

    /* ---- signe ---- */

    pub fn signe(&self) -> Signe {
        match self {
            Expr::Symbole(s) => s.signe,
            Expr::Entier(n) => n.signe,
            Expr::Somme(_, _, s) | Expr::Produit(_, _, s) => *s,
            Expr::Operateur(op) => op.signe(),
            Expr::Etat(e) => e.signe(),
        }
    }

    /// Copie du nœud avec signe positif.
    pub fn sans_signe(&self) -> Expr {
        if !self.signe().est_negatif() {
            return self.clone();
        }
        self.clone().fois_signe(Signe::Negatif)
    }

    /// Multiplie le signe du nœud (nouvelle valeur, aucune mutation).
    pub fn fois_signe(self, s: Signe) -> Expr {
        if !s.est_negatif() {
            return self;
        }
        match self {
            Expr::Symbole(x) => Expr::Symbole(Symbole {
                nom: x.nom,
                signe: -x.signe,
            }),
            Expr::Entier(n) => Expr::Entier(n.negatif()),
            Expr::Somme(g, d, sn) => Expr::Somme(g, d, -sn),
            Expr::Produit(g, d, sn) => Expr::Produit(g, d, -sn),
            Expr::Operateur(op) => Expr::Operateur(op.negatif()),
            Expr::Etat(e) => Expr::Etat(e.negatif()),
        }
    }

    /* ---- prédicats ---- */

    pub fn est_zero(&self) -> bool {
        matches!(self, Expr::Entier(n) if n.est_zero())
    }

    pub fn est_scalaire(&self) -> bool {
        matches!(self, Expr::Symbole(_) | Expr::Entier(_))
    }

    /// Rang d'échange canonique : les entiers passent avant les symboles,
    /// les symboles avant tout le reste.
    fn rang(&self) -> u8 {
        match self {
            Expr::Entier(_) => 0,
            Expr::Symbole(_) => 1,
            _ => 2,
        }
    }

    /* ---- constructeurs normalisants ---- */

    /// Invariant d'addition : deux opérandes négatifs ⇒ signe commun remonté
    /// sur le nœud, enfants repassés positifs ; seul l'opérande droit
    /// négatif ⇒ conservé tel quel (rendu soustractif). Le signe n'est
    /// jamais perdu.
    pub fn somme(lhs: Expr, rhs: Expr) -> Expr {
        if lhs.signe().est_negatif() && rhs.signe().est_negatif() {
            Expr::Somme(
                Box::new(lhs.sans_signe()),
                Box::new(rhs.sans_signe()),
                Signe::Negatif,
            )
        } else {
            Expr::Somme(Box::new(lhs), Box::new(rhs), Signe::Positif)
        }
    }

    /// Invariant de multiplication : les signes des opérandes remontent sur
    /// le nœud (opérandes stockés positifs), puis échange canonique :
    /// Entier < Symbole < reste, deux Symboles par nom. Deux produits
    /// structurellement égaux se construisent donc à l'identique.
    pub fn produit(lhs: Expr, rhs: Expr) -> Expr {
        let signe = lhs.signe() * rhs.signe();
        let mut g = lhs.sans_signe();
        let mut d = rhs.sans_signe();

        let echange = match (g.rang(), d.rang()) {
            (rg, rd) if rd < rg => true,
            (1, 1) => match (&g, &d) {
                (Expr::Symbole(a), Expr::Symbole(b)) => b.nom < a.nom,
                _ => false,
            },
            _ => false,
        };
        if echange {
            std::mem::swap(&mut g, &mut d);
        }

        Expr::Produit(Box::new(g), Box::new(d), signe)
    }

    /* ---- passes de réécriture ---- */

    /// Une étape de développement (distribution / ré-association).
    pub fn developpe(&self) -> Expr {
        developpe(self)
    }

    /// Développement jusqu'au point fixe.
    pub fn developpe_complet(self) -> Expr {
        developpe_complet(self)
    }

    /// Une étape de simplification.
    pub fn simplifie(&self) -> Expr {
        simplifie(self)
    }

    /// Simplification jusqu'au point fixe.
    pub fn simplifie_complet(self) -> Expr {
        simplifie_complet(self)
    }

    /// Une étape de regroupement des termes semblables.
    pub fn regroupe(&self) -> Expr {
        regroupe(self)
    }

    /// Regroupement jusqu'au point fixe.
    pub fn regroupe_complet(self) -> Expr {
        regroupe_complet(self)
    }
}

/* ------------------------ combinateurs infixes ------------------------ */

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::somme(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::somme(self, rhs.fois_signe(Signe::Negatif))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::produit(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    /// Négation unaire : bascule le champ signe du nœud.
    ///
    /// Interdite sur un état nu : le signe d'un ket/bra se porte via un nœud
    /// englobant, jamais comme opération isolée.
    fn neg(self) -> Expr {
        match self {
            Expr::Etat(_) => {
                panic!("négation unaire interdite sur un état nu : porter le signe via un nœud englobant")
            }
            autre => autre.fois_signe(Signe::Negatif),
        }
    }
}

impl Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Expr {
        let mut acc: Option<Expr> = None;
        for terme in iter {
            acc = Some(match acc {
                None => terme,
                Some(courant) => courant + terme,
            });
        }
        acc.unwrap_or_else(Expr::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entier, Expr, Symbole};
    use crate::noyau::signe::Signe;

    fn a() -> Expr {
        Expr::symbole("a")
    }

    fn b() -> Expr {
        Expr::symbole("b")
    }

    /* ---- Symbole ---- */

    #[test]
    fn symbole_rendu() {
        assert_eq!(a().to_string(), "a");
        assert_eq!((-a()).to_string(), "-a");
    }

    #[test]
    fn symbole_ordre_par_nom() {
        assert!(Symbole::nouveau("a") < Symbole::nouveau("b"));
    }

    #[test]
    fn symbole_egalite_inclut_le_signe() {
        assert_ne!(a(), -a());
        assert_eq!(-(-a()), a());
    }

    /* ---- Entier ---- */

    #[test]
    fn entier_rendu() {
        assert_eq!(Expr::entier(4).to_string(), "4");
        assert_eq!((-Expr::entier(4)).to_string(), "-4");
    }

    #[test]
    fn entier_arithmetique_signee() {
        assert_eq!(Entier::nouveau(1) + Entier::nouveau(2), Entier::nouveau(3));
        assert_eq!(Entier::nouveau(1) + Entier::nouveau(-2), Entier::nouveau(-1));
        assert_eq!(Entier::nouveau(5) * Entier::nouveau(2), Entier::nouveau(10));
        assert_eq!(Entier::nouveau(-5) * Entier::nouveau(2), Entier::nouveau(-10));
    }

    #[test]
    fn entier_zero_toujours_positif() {
        assert_eq!(-Entier::nouveau(0), Entier::nouveau(0));
        assert_eq!(Entier::nouveau(2) + Entier::nouveau(-2), Entier::nouveau(0));
        assert_eq!(
            (Entier::nouveau(2) + Entier::nouveau(-2)).signe,
            Signe::Positif
        );
    }

    /* ---- Somme : placement du signe ---- */

    #[test]
    fn somme_rendu() {
        assert_eq!((a() + b()).to_string(), "(a + b)");
        assert_eq!((-(a() + b())).to_string(), "-(a + b)");
    }

    #[test]
    fn somme_droite_negative_rend_soustraction() {
        assert_eq!((a() + (-b())).to_string(), "(a - b)");
        assert_eq!((a() - b()).to_string(), "(a - b)");
    }

    #[test]
    fn somme_gauche_negative_conservee() {
        assert_eq!((-a() + b()).to_string(), "(-a + b)");
    }

    #[test]
    fn somme_deux_negatifs_factorises() {
        assert_eq!((-a() - b()).to_string(), "-(a + b)");
        assert_eq!((-(-a() - b())).to_string(), "(a + b)");
    }

    /* ---- Produit : signes remontés + échange canonique ---- */

    #[test]
    fn produit_rendu() {
        assert_eq!((a() * b()).to_string(), "[a⋅b]");
    }

    #[test]
    fn produit_signes_remontes() {
        assert_eq!(((-a()) * b()).to_string(), "-[a⋅b]");
        assert_eq!((a() * (-b())).to_string(), "-[a⋅b]");
        assert_eq!(((-a()) * (-b())).to_string(), "[a⋅b]");
        assert_eq!((-((-a()) * b())).to_string(), "[a⋅b]");
    }

    #[test]
    fn produit_echange_canonique() {
        // les symboles s'ordonnent par nom
        assert_eq!((b() * a()).to_string(), "[a⋅b]");
        // les entiers passent devant les symboles
        assert_eq!((Expr::entier(3) * a()).to_string(), "[3⋅a]");
        assert_eq!((a() * Expr::entier(3)).to_string(), "[3⋅a]");
        // les scalaires passent devant les états
        assert_eq!((Expr::fermion_ket(&["b"]) * a()).to_string(), "[a⋅|b⟩]");
    }

    #[test]
    fn produit_egalite_independante_de_l_ordre() {
        assert_eq!(a() * Expr::entier(3), Expr::entier(3) * a());
        assert_eq!(b() * a(), a() * b());
    }

    /* ---- divers ---- */

    #[test]
    fn somme_iterateur() {
        let total: Expr = [a(), b(), a()].into_iter().sum();
        assert_eq!(total.to_string(), "((a + b) + a)");
        let vide: Expr = std::iter::empty::<Expr>().sum();
        assert!(vide.est_zero());
    }

    #[test]
    #[should_panic(expected = "négation unaire interdite")]
    fn negation_d_un_etat_nu_interdite() {
        let _ = -Expr::fermion_ket(&["a"]);
    }
}
