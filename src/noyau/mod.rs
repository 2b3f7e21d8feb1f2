//! Noyau symbolique de seconde quantification
//!
//! Organisation interne :
//! - signe.rs      : groupe multiplicatif {+, −} porté par chaque nœud
//! - expr.rs       : AST exact (Symbole, Entier, Somme, Produit, Operateur, Etat)
//! - canon.rs      : tri des modes par sélection + parité de permutation
//! - etats.rs      : kets/bras de Fock, création/annihilation, ⟨·|·⟩
//! - operateurs.rs : c†/c fermioniques + opérateurs génériques
//! - parcours.rs   : parcours postfixe itératif (réécriture locale)
//! - point_fixe.rs : itération d'une passe jusqu'à stabilité structurelle
//! - developpe.rs  : distribution + ré-association à droite
//! - simplifie.rs  : zéro/un, entiers, application des opérateurs, ⟨·|·⟩
//! - regroupe.rs   : termes semblables et facteurs communs
//! - format.rs     : rendu déterministe

pub mod canon;
pub mod developpe;
pub mod etats;
pub mod expr;
pub mod format;
pub mod operateurs;
pub mod parcours;
pub mod point_fixe;
pub mod regroupe;
pub mod signe;
pub mod simplifie;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use etats::{Etat, Occupation};
pub use expr::{Entier, Expr, Symbole};
pub use operateurs::Operateur;
pub use point_fixe::point_fixe;
pub use signe::Signe;
