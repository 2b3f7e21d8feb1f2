//! Tests de propriétés (campagne) : invariants physiques + pipeline complet.
//!
//! But : vérifier l'algèbre fermionique de bout en bout, pas règle par règle
//! (les règles locales ont leurs tests unitaires dans chaque module).
//! - exclusion de Pauli, anticommutation, orthonormalité de la base de Fock
//! - pipeline développer → simplifier → regrouper sur des hamiltoniens réels
//!
//! Notes (aligné avec l'état actuel du noyau) :
//! - le regroupement ne porte que sur les pivots symboliques et les facteurs
//!   communs ; deux kets opposés ne s'annulent pas structurellement, on
//!   compare donc les deux membres signés ;
//! - l'échange canonique peut replacer un facteur commun droit devant la
//!   somme ([c⋅(a + b)] pour a·c + b·c).

use super::expr::{Expr, Symbole};
use super::signe::Signe;

fn pipeline(e: Expr) -> String {
    e.developpe_complet()
        .simplifie_complet()
        .regroupe_complet()
        .to_string()
}

/// Opérateur nombre n_mode = c†_mode c_mode.
fn nombre(mode: &str) -> Expr {
    Expr::fd(mode) * Expr::f(mode)
}

/* ------------------------ Exclusion de Pauli ------------------------ */

#[test]
fn sci_pauli_a_la_construction() {
    assert!(Expr::fermion_ket(&["a", "a"]).est_zero());
    assert!(Expr::fermion_bra(&["a", "b", "a"]).est_zero());
}

#[test]
fn sci_pauli_par_double_creation() {
    // c_a† c_a† |⟩ = 0
    let e = Expr::fd("a") * (Expr::fd("a") * Expr::fermion_ket(&[]));
    assert!(e.simplifie_complet().est_zero());
}

/* ------------------------ Anticommutation ------------------------ */

#[test]
fn sci_anticommutation_des_creations() {
    // c_a† c_b† |⟩ = -c_b† c_a† |⟩
    let ab = (Expr::fd("a") * (Expr::fd("b") * Expr::fermion_ket(&[]))).simplifie_complet();
    let ba = (Expr::fd("b") * (Expr::fd("a") * Expr::fermion_ket(&[]))).simplifie_complet();
    assert_eq!(ab.to_string(), "|a, b⟩");
    assert_eq!(ba, ab.fois_signe(Signe::Negatif));
}

#[test]
fn sci_signe_de_permutation_compense() {
    // ⟨b,a|b,a⟩ = (-⟨a,b|)(-|a,b⟩) = 1
    let e = Expr::fermion_bra(&["b", "a"]) * Expr::fermion_ket(&["b", "a"]);
    assert_eq!(e.simplifie_complet().to_string(), "1");
}

/* ------------------------ Opérateur nombre ------------------------ */

#[test]
fn sci_operateur_nombre() {
    // n_a |a, b⟩ = |a, b⟩
    let e = nombre("a") * Expr::fermion_ket(&["a", "b"]);
    assert_eq!(
        e.developpe_complet().simplifie_complet(),
        Expr::fermion_ket(&["a", "b"])
    );

    // n_a |b⟩ = 0
    let e = nombre("a") * Expr::fermion_ket(&["b"]);
    assert!(e.developpe_complet().simplifie_complet().est_zero());
}

/* ------------------------ Orthonormalité ------------------------ */

#[test]
fn sci_base_orthonormee() {
    let modes: [&[&str]; 4] = [&[], &["a"], &["b"], &["a", "b"]];
    for (i, bra) in modes.iter().enumerate() {
        for (j, ket) in modes.iter().enumerate() {
            let e = (Expr::fermion_bra(bra) * Expr::fermion_ket(ket)).simplifie_complet();
            if i == j {
                assert_eq!(e, Expr::un(), "⟨{bra:?}|{ket:?}⟩");
            } else {
                assert!(e.est_zero(), "⟨{bra:?}|{ket:?}⟩");
            }
        }
    }
}

/* ------------------------ Adjoint ------------------------ */

#[test]
fn sci_adjoint_involutif() {
    let k = match Expr::fermion_ket(&["a", "b"]) {
        Expr::Etat(e) => e,
        autre => panic!("ket attendu, obtenu {autre}"),
    };
    assert_eq!(k.clone().dague().dague(), k);
    assert_eq!(k.clone().dague().to_string(), "⟨a, b|");

    let c = crate::noyau::operateurs::Operateur::creation(Symbole::nouveau("a"));
    assert_eq!(c.clone().dague().dague(), c);
}

/* ------------------------ Pipeline complet ------------------------ */

#[test]
fn sci_amplitude_simple() {
    // H = 2·b·c_a†·c_a
    let h = Expr::entier(2) * Expr::symbole("b") * Expr::fd("a") * Expr::f("a");
    let dans_a = Expr::fermion_bra(&["a"]) * h.clone() * Expr::fermion_ket(&["a"]);
    assert_eq!(pipeline(dans_a), "[2⋅b]");

    let dans_c = Expr::fermion_bra(&["c"]) * h * Expr::fermion_ket(&["c"]);
    assert_eq!(pipeline(dans_c), "0");
}

/// Hamiltonien à deux sites avec spin : énergies locales E1/E2 et couplage J
/// entre les modes ↑ des deux sites.
fn hamiltonien_deux_sites() -> Expr {
    let h1 = Expr::symbole("E1") * (nombre("1↑") + nombre("1↓"));
    let h2 = Expr::symbole("E2") * (nombre("2↑") + nombre("2↓"));
    let couplage = Expr::symbole("J")
        * (nombre("1↑")
            + Expr::fd("1↑") * Expr::f("2↑")
            + Expr::fd("2↑") * Expr::f("1↑")
            + nombre("2↑"));
    h1 + h2 + couplage
}

#[test]
fn sci_deux_sites_etat_fondamental() {
    // ⟨1↑,1↓|H|1↑,1↓⟩ = 2·E1 + J
    let e = Expr::fermion_bra(&["1↑", "1↓"])
        * hamiltonien_deux_sites()
        * Expr::fermion_ket(&["1↑", "1↓"]);
    assert_eq!(pipeline(e), "([2⋅E1] + J)");
}

#[test]
fn sci_deux_sites_etat_croise() {
    // ⟨1↑,2↑|H|1↑,2↑⟩ = E1 + E2 + 2·J : les termes croisés c_1↑†c_2↑ et
    // c_2↑†c_1↑ s'annulent par exclusion de Pauli / orthogonalité
    let e = Expr::fermion_bra(&["1↑", "2↑"])
        * hamiltonien_deux_sites()
        * Expr::fermion_ket(&["1↑", "2↑"]);
    assert_eq!(pipeline(e), "((E1 + E2) + [2⋅J])");
}

#[test]
fn sci_regroupement_apres_simplification() {
    // (⟨a|n_a|a⟩ + ⟨a|n_a|a⟩)·x se regroupe en un seul terme
    let amplitude = Expr::fermion_bra(&["a"])
        * (Expr::symbole("x") * nombre("a"))
        * Expr::fermion_ket(&["a"]);
    let total = amplitude.clone() + amplitude;
    assert_eq!(pipeline(total), "[2⋅x]");
}
