//! Algèbre Q-pur — moteur symbolique exact pour la seconde quantification
//! fermionique.
//!
//! Les hamiltoniens et les états de base sont des arbres d'expression
//! immuables (sommes, produits, opérateurs, kets/bras de Fock) réduits par
//! réécriture (développement, simplification, ordre canonique fermionique)
//! jusqu'à une forme normale dont le rendu textuel est la réponse physique.
//!
//! ```
//! use algebre_qpur::noyau::Expr;
//!
//! // ⟨a| (2·b·c_a†·c_a) |a⟩ = 2·b
//! let h = Expr::entier(2) * Expr::symbole("b") * Expr::fd("a") * Expr::f("a");
//! let amplitude = Expr::fermion_bra(&["a"]) * h * Expr::fermion_ket(&["a"]);
//! assert_eq!(
//!     amplitude.developpe_complet().simplifie_complet().to_string(),
//!     "[2⋅b]"
//! );
//! ```

pub mod noyau;
