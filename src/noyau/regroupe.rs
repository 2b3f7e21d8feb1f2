// src/noyau/regroupe.rs
//
// Regroupement des termes semblables d'une somme :
// - n·x + m·x → (n+m)·x (un symbole nu compte pour ±1·x) ; une somme nulle
//   s'effondre sur l'élément zéro ;
// - facteur commun : a·c + b·c → (a + b)·c et a·b + a·c → a·(b + c).
// L'échange canonique des produits peut replacer le facteur devant la somme.

use super::expr::{Entier, Expr, Symbole};
use super::parcours::parcours_postfixe;
use super::point_fixe::point_fixe;
use super::signe::Signe;

/// Une étape de regroupement sur tout l'arbre.
pub fn regroupe(expr: &Expr) -> Expr {
    parcours_postfixe(expr, regroupe_noeud)
}

/// Regroupement jusqu'au point fixe.
pub fn regroupe_complet(expr: Expr) -> Expr {
    point_fixe(expr, regroupe)
}

fn regroupe_noeud(e: Expr) -> Expr {
    let (g, d, s) = match e {
        Expr::Somme(g, d, s) => (g, d, s),
        autre => return autre,
    };

    // termes semblables autour d'un même symbole pivot
    if let (Some((c_g, x_g)), Some((c_d, x_d))) = (coefficient_de(&g), coefficient_de(&d)) {
        if x_g.nom == x_d.nom {
            let total = c_g + c_d;
            if total.est_zero() {
                return Expr::zero();
            }
            return Expr::produit(Expr::Entier(total), Expr::Symbole(x_g)).fois_signe(s);
        }
    }

    // facteur commun entre deux produits
    if let (Expr::Produit(a, c_g, s_g), Expr::Produit(b, c_d, s_d)) = (&*g, &*d) {
        if a == b {
            // a·x + a·y → a·(x + y)
            return Expr::produit(
                (**a).clone(),
                Expr::somme(
                    (**c_g).clone().fois_signe(*s_g),
                    (**c_d).clone().fois_signe(*s_d),
                ),
            )
            .fois_signe(s);
        }
        if c_g == c_d {
            // x·c + y·c → (x + y)·c
            return Expr::produit(
                Expr::somme(
                    (**a).clone().fois_signe(*s_g),
                    (**b).clone().fois_signe(*s_d),
                ),
                (**c_g).clone(),
            )
            .fois_signe(s);
        }
    }

    Expr::Somme(g, d, s)
}

/// Décompose un terme en coefficient entier × symbole pivot :
/// `x` → (±1, x) ; `[n⋅x]` → (±n, x) ; sinon None.
fn coefficient_de(e: &Expr) -> Option<(Entier, Symbole)> {
    match e {
        Expr::Symbole(x) => Some((avec_signe(Entier::nouveau(1), x.signe), x.sans_signe())),
        Expr::Produit(g, d, s) => match (&**g, &**d) {
            (Expr::Entier(c), Expr::Symbole(x)) => {
                Some((avec_signe(c.clone(), *s), x.clone()))
            }
            _ => None,
        },
        _ => None,
    }
}

fn avec_signe(c: Entier, s: Signe) -> Entier {
    if s.est_negatif() {
        c.negatif()
    } else {
        c
    }
}
