// src/noyau/developpe.rs
//
// Développement : distribue le produit sur la somme, ré-associe les produits
// à droite et remonte les scalaires devant les bras. Le signe du produit est
// poussé dans CHAQUE terme distribué ; l'invariant d'addition replace ensuite
// un éventuel signe commun sur le nœud somme.
//
// Une étape = une réécriture locale par nœud (parcours postfixe) ; le point
// fixe itère jusqu'à stabilité.

use super::expr::Expr;
use super::parcours::parcours_postfixe;
use super::point_fixe::point_fixe;

/// Une étape de développement sur tout l'arbre.
pub fn developpe(expr: &Expr) -> Expr {
    parcours_postfixe(expr, developpe_noeud)
}

/// Développement jusqu'au point fixe.
pub fn developpe_complet(expr: Expr) -> Expr {
    point_fixe(expr, developpe)
}

fn developpe_noeud(e: Expr) -> Expr {
    let (g, d, s) = match e {
        Expr::Produit(g, d, s) => (g, d, s),
        autre => return autre,
    };

    match (*g, *d) {
        // (a + b)·c → a·c + b·c
        (Expr::Somme(a, b, sa), c) => {
            let signe = s * sa;
            Expr::somme(
                Expr::produit(*a, c.clone()).fois_signe(signe),
                Expr::produit(*b, c).fois_signe(signe),
            )
        }

        // a·(b + c) → a·b + a·c
        (a, Expr::Somme(b, c, sd)) => {
            let signe = s * sd;
            Expr::somme(
                Expr::produit(a.clone(), *b).fois_signe(signe),
                Expr::produit(a, *c).fois_signe(signe),
            )
        }

        // (a·b)·c → a·(b·c)
        (Expr::Produit(a, b, sg), c) => {
            Expr::produit(*a, Expr::produit(*b, c)).fois_signe(s * sg)
        }

        // ⟨ψ|·(scalaire·reste) → scalaire·(⟨ψ|·reste) : garde les
        // coefficients hors des chaînes opérateur/état pour que les règles
        // d'application et de produit scalaire puissent s'accrocher.
        (Expr::Etat(bra), Expr::Produit(m_g, m_d, sm))
            if bra.est_bra() && m_g.est_scalaire() =>
        {
            Expr::produit(*m_g, Expr::produit(Expr::Etat(bra), *m_d)).fois_signe(s * sm)
        }

        // cas de base : rien à réécrire ici
        (g, d) => Expr::Produit(Box::new(g), Box::new(d), s),
    }
}
