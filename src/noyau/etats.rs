// src/noyau/etats.rs
//
// Kets et bras de l'espace de Fock.
//
// - Ket/Bra génériques : occupation arbitraire (nombre ≥ 1), rendu "nom:n".
//   États de construction/affichage seulement : l'algèbre fermionique
//   (ordre, création, annihilation) n'y est pas définie.
// - FermionKet/FermionBra : occupation exactement 1 par mode (exclusion de
//   Pauli), modes triés par nom, signe de permutation replié dans le signe
//   du nœud dès la construction.
//
// Le bra est le miroir du ket : créer sur un bra retire le mode, annihiler
// l'insère (⟨ψ|c† = (c|ψ⟩)†).

use super::canon::ordonne_modes;
use super::expr::{Entier, Expr, Symbole};
use super::signe::Signe;

/// Occupation d'un mode d'un état générique.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Occupation {
    pub symbole: Symbole,
    pub nombre: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Etat {
    Ket {
        occupation: Vec<Occupation>,
        signe: Signe,
    },
    Bra {
        occupation: Vec<Occupation>,
        signe: Signe,
    },
    FermionKet {
        modes: Vec<Symbole>,
        signe: Signe,
    },
    FermionBra {
        modes: Vec<Symbole>,
        signe: Signe,
    },
}

impl Etat {
    /* ---- constructeurs ---- */

    pub fn ket(occupation: Vec<(Symbole, u32)>) -> Etat {
        Etat::Ket {
            occupation: Etat::occupations(occupation),
            signe: Signe::Positif,
        }
    }

    pub fn bra(occupation: Vec<(Symbole, u32)>) -> Etat {
        Etat::Bra {
            occupation: Etat::occupations(occupation),
            signe: Signe::Positif,
        }
    }

    fn occupations(paires: Vec<(Symbole, u32)>) -> Vec<Occupation> {
        paires
            .into_iter()
            .map(|(symbole, nombre)| Occupation { symbole, nombre })
            .collect()
    }

    /// Ket fermionique : tri immédiat des modes (signe de permutation
    /// replié, signes des symboles inclus) ; un doublon donne l'élément
    /// zéro.
    pub fn fermion_ket(modes: Vec<Symbole>) -> Expr {
        match Etat::modes_canoniques(modes) {
            None => Expr::zero(),
            Some((modes, signe)) => Expr::Etat(Etat::FermionKet { modes, signe }),
        }
    }

    /// Bra fermionique (mêmes invariants que le ket).
    pub fn fermion_bra(modes: Vec<Symbole>) -> Expr {
        match Etat::modes_canoniques(modes) {
            None => Expr::zero(),
            Some((modes, signe)) => Expr::Etat(Etat::FermionBra { modes, signe }),
        }
    }

    /// Tri canonique + repli des signes portés par les modes.
    /// None si un mode apparaît deux fois (exclusion de Pauli).
    fn modes_canoniques(modes: Vec<Symbole>) -> Option<(Vec<Symbole>, Signe)> {
        let mut signe = Signe::Positif;
        let nus: Vec<Symbole> = modes
            .into_iter()
            .map(|m| {
                signe = signe * m.signe;
                m.sans_signe()
            })
            .collect();

        let (tries, s_perm) = ordonne_modes(&nus);
        if tries.windows(2).any(|w| w[0].nom == w[1].nom) {
            return None;
        }
        Some((tries, signe * s_perm))
    }

    /* ---- signe ---- */

    pub fn signe(&self) -> Signe {
        match self {
            Etat::Ket { signe, .. }
            | Etat::Bra { signe, .. }
            | Etat::FermionKet { signe, .. }
            | Etat::FermionBra { signe, .. } => *signe,
        }
    }

    pub(crate) fn negatif(self) -> Etat {
        match self {
            Etat::Ket { occupation, signe } => Etat::Ket {
                occupation,
                signe: -signe,
            },
            Etat::Bra { occupation, signe } => Etat::Bra {
                occupation,
                signe: -signe,
            },
            Etat::FermionKet { modes, signe } => Etat::FermionKet {
                modes,
                signe: -signe,
            },
            Etat::FermionBra { modes, signe } => Etat::FermionBra {
                modes,
                signe: -signe,
            },
        }
    }

    /* ---- prédicats ---- */

    pub fn est_ket(&self) -> bool {
        matches!(self, Etat::Ket { .. } | Etat::FermionKet { .. })
    }

    pub fn est_bra(&self) -> bool {
        matches!(self, Etat::Bra { .. } | Etat::FermionBra { .. })
    }

    /* ---- adjoint ---- */

    /// Adjoint : ket ↔ bra, signe conservé.
    pub fn dague(self) -> Etat {
        match self {
            Etat::Ket { occupation, signe } => Etat::Bra { occupation, signe },
            Etat::Bra { occupation, signe } => Etat::Ket { occupation, signe },
            Etat::FermionKet { modes, signe } => Etat::FermionBra { modes, signe },
            Etat::FermionBra { modes, signe } => Etat::FermionKet { modes, signe },
        }
    }

    /* ---- algèbre fermionique ---- */

    /// Remise en ordre canonique. Idempotente sur les états fermioniques
    /// (toujours construits triés) ; erreur de programmation sur un état
    /// générique.
    pub fn ordonner(&self) -> Etat {
        match self {
            Etat::FermionKet { modes, signe } => {
                let (tries, s_perm) = ordonne_modes(modes);
                Etat::FermionKet {
                    modes: tries,
                    signe: *signe * s_perm,
                }
            }
            Etat::FermionBra { modes, signe } => {
                let (tries, s_perm) = ordonne_modes(modes);
                Etat::FermionBra {
                    modes: tries,
                    signe: *signe * s_perm,
                }
            }
            Etat::Ket { .. } | Etat::Bra { .. } => {
                panic!("ordre non implémenté pour un état générique")
            }
        }
    }

    /// Crée une particule dans `mode`. Mode déjà occupé ⇒ élément zéro
    /// (exclusion de Pauli). Sur un bra, miroir : retire le mode.
    pub fn creer(&self, mode: &Symbole) -> Expr {
        match self {
            Etat::FermionKet { modes, signe } => match insere_mode(modes, *signe, mode) {
                None => Expr::zero(),
                Some((modes, signe)) => Expr::Etat(Etat::FermionKet { modes, signe }),
            },
            Etat::FermionBra { modes, signe } => match retire_mode(modes, *signe, mode) {
                None => Expr::zero(),
                Some((modes, signe)) => Expr::Etat(Etat::FermionBra { modes, signe }),
            },
            Etat::Ket { .. } | Etat::Bra { .. } => {
                panic!("création non implémentée pour un état générique")
            }
        }
    }

    /// Annihile la particule du `mode`. Mode absent ⇒ élément zéro.
    /// Sur un bra, miroir : insère le mode.
    pub fn annihiler(&self, mode: &Symbole) -> Expr {
        match self {
            Etat::FermionKet { modes, signe } => match retire_mode(modes, *signe, mode) {
                None => Expr::zero(),
                Some((modes, signe)) => Expr::Etat(Etat::FermionKet { modes, signe }),
            },
            Etat::FermionBra { modes, signe } => match insere_mode(modes, *signe, mode) {
                None => Expr::zero(),
                Some((modes, signe)) => Expr::Etat(Etat::FermionBra { modes, signe }),
            },
            Etat::Ket { .. } | Etat::Bra { .. } => {
                panic!("annihilation non implémentée pour un état générique")
            }
        }
    }

    /// Produit scalaire ⟨self|ket⟩ : ±1 si les deux états canonisés portent
    /// la même séquence de modes (signe = produit des deux signes), 0 sinon.
    /// C'est l'orthonormalité de la base de Fock.
    pub fn produit_scalaire(&self, ket: &Etat) -> Expr {
        let bra = self.ordonner();
        let ket = ket.ordonner();

        match (&bra, &ket) {
            (
                Etat::FermionBra {
                    modes: mb,
                    signe: sb,
                },
                Etat::FermionKet {
                    modes: mk,
                    signe: sk,
                },
            ) => {
                if mb == mk {
                    Expr::Entier(Entier {
                        grandeur: num_traits::One::one(),
                        signe: *sb * *sk,
                    })
                } else {
                    Expr::zero()
                }
            }
            _ => panic!("produit scalaire défini seulement entre bra et ket fermioniques"),
        }
    }
}

/* ------------------------ insertion / retrait ------------------------ */

/// Préfixe le mode puis re-canonise : le signe obtenu est exactement le coût
/// d'anticommutation de l'insertion en position triée.
/// None si le mode est déjà occupé.
fn insere_mode(modes: &[Symbole], signe: Signe, mode: &Symbole) -> Option<(Vec<Symbole>, Signe)> {
    if modes.iter().any(|m| m.nom == mode.nom) {
        return None;
    }

    let mut nouveaux = Vec::with_capacity(modes.len() + 1);
    nouveaux.push(mode.sans_signe());
    nouveaux.extend(modes.iter().cloned());

    let (tries, s_perm) = ordonne_modes(&nouveaux);
    Some((tries, signe * s_perm * mode.signe))
}

/// Retire le mode avec signe (−1)^position : le nombre d'opérateurs à
/// enjamber pour l'amener en tête ({c_i, c_j†} = δ_ij).
/// None si le mode est absent.
fn retire_mode(modes: &[Symbole], signe: Signe, mode: &Symbole) -> Option<(Vec<Symbole>, Signe)> {
    let position = modes.iter().position(|m| m.nom == mode.nom)?;

    let mut restants = modes.to_vec();
    restants.remove(position);

    Some((restants, signe * Signe::depuis_parite(position) * mode.signe))
}
