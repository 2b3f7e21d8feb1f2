// src/noyau/simplifie.rs
//
// Simplification : absorption du zéro, repli des entiers, application des
// opérateurs fermioniques aux états et produit scalaire ⟨·|·⟩. Chaque règle
// est locale ; l'expression est supposée développée (chaînes de produits
// associées à droite) pour que les règles d'application s'enchaînent.

use super::etats::Etat;
use super::expr::Expr;
use super::operateurs::Operateur;
use super::parcours::parcours_postfixe;
use super::point_fixe::point_fixe;
use super::signe::Signe;

/// Une étape de simplification sur tout l'arbre.
pub fn simplifie(expr: &Expr) -> Expr {
    parcours_postfixe(expr, simplifie_noeud)
}

/// Simplification jusqu'au point fixe.
pub fn simplifie_complet(expr: Expr) -> Expr {
    point_fixe(expr, simplifie)
}

fn simplifie_noeud(e: Expr) -> Expr {
    match e {
        Expr::Produit(g, d, s) => simplifie_produit(*g, *d, s),
        Expr::Somme(g, d, s) => simplifie_somme(*g, *d, s),
        // les états fermioniques sont construits triés ; re-canoniser est
        // idempotent et rétablit l'invariant si un appelant l'a contourné
        Expr::Etat(etat)
            if matches!(etat, Etat::FermionKet { .. } | Etat::FermionBra { .. }) =>
        {
            Expr::Etat(etat.ordonner())
        }
        feuille => feuille,
    }
}

fn simplifie_produit(g: Expr, d: Expr, s: Signe) -> Expr {
    if g.est_zero() || d.est_zero() {
        return Expr::zero();
    }

    match (g, d) {
        // 1·x → x, x·1 → x (la grandeur seule compte, le signe se replie)
        (Expr::Entier(n), x) if n.est_un() => x.fois_signe(s * n.signe),
        (x, Expr::Entier(n)) if n.est_un() => x.fois_signe(s * n.signe),

        // repli des entiers
        (Expr::Entier(m), Expr::Entier(n)) => Expr::Entier(m * n).fois_signe(s),

        // opérateur appliqué à un état ; un opérateur générique n'a pas de
        // règle et rend le même produit symbolique (point fixe stable)
        (Expr::Operateur(op), Expr::Etat(etat)) => op.appliquer(&etat).fois_signe(s),

        // bra multiplié à droite par un opérateur fermionique :
        // ⟨ψ|c† = (c|ψ⟩)† (les opérateurs génériques restent à droite)
        (Expr::Etat(b), Expr::Operateur(op))
            if b.est_bra() && !matches!(op, Operateur::Generique { .. }) =>
        {
            op.appliquer(&b).fois_signe(s)
        }

        // orthonormalité : ⟨φ|ψ⟩ ∈ {−1, 0, +1}
        (Expr::Etat(b), Expr::Etat(k)) if b.est_bra() && k.est_ket() => {
            b.produit_scalaire(&k).fois_signe(s)
        }

        // ⟨φ|·(scalaire·|ψ⟩) → scalaire·⟨φ|ψ⟩
        (Expr::Etat(b), Expr::Produit(m_g, m_d, sm)) if b.est_bra() && m_g.est_scalaire() => {
            match *m_d {
                Expr::Etat(k) if k.est_ket() => {
                    Expr::produit(*m_g, b.produit_scalaire(&k)).fois_signe(s * sm)
                }
                m_d => Expr::Produit(
                    Box::new(Expr::Etat(b)),
                    Box::new(Expr::Produit(m_g, Box::new(m_d), sm)),
                    s,
                ),
            }
        }

        (g, d) => Expr::Produit(Box::new(g), Box::new(d), s),
    }
}

fn simplifie_somme(g: Expr, d: Expr, s: Signe) -> Expr {
    if g.est_zero() {
        return d.fois_signe(s);
    }
    if d.est_zero() {
        return g.fois_signe(s);
    }

    match (g, d) {
        // repli des entiers (l'opérande droit peut porter un signe : 2 - 3)
        (Expr::Entier(m), Expr::Entier(n)) => Expr::Entier(m + n).fois_signe(s),
        (g, d) => Expr::Somme(Box::new(g), Box::new(d), s),
    }
}
