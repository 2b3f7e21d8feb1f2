// src/noyau/operateurs.rs
//
// Opérateurs de l'algèbre.
// - Generique : opérateur nommé, drapeau dague, pas de règle d'application
//   propre (le produit reste symbolique).
// - Creation / Annihilation : opérateurs fermioniques c†_mode / c_mode,
//   mutuellement adjoints, appliqués via creer/annihiler de l'état.

use super::etats::Etat;
use super::expr::{Expr, Symbole};
use super::signe::Signe;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Generique {
        nom: String,
        dague: bool,
        signe: Signe,
    },
    Creation {
        mode: Symbole,
        signe: Signe,
    },
    Annihilation {
        mode: Symbole,
        signe: Signe,
    },
}

impl Operateur {
    pub fn generique(nom: &str) -> Operateur {
        Operateur::Generique {
            nom: nom.to_string(),
            dague: false,
            signe: Signe::Positif,
        }
    }

    /// c†_mode (le signe porté par le mode remonte sur l'opérateur).
    pub fn creation(mode: Symbole) -> Operateur {
        Operateur::Creation {
            signe: mode.signe,
            mode: mode.sans_signe(),
        }
    }

    /// c_mode.
    pub fn annihilation(mode: Symbole) -> Operateur {
        Operateur::Annihilation {
            signe: mode.signe,
            mode: mode.sans_signe(),
        }
    }

    pub fn signe(&self) -> Signe {
        match self {
            Operateur::Generique { signe, .. }
            | Operateur::Creation { signe, .. }
            | Operateur::Annihilation { signe, .. } => *signe,
        }
    }

    pub(crate) fn negatif(self) -> Operateur {
        match self {
            Operateur::Generique { nom, dague, signe } => Operateur::Generique {
                nom,
                dague,
                signe: -signe,
            },
            Operateur::Creation { mode, signe } => Operateur::Creation { mode, signe: -signe },
            Operateur::Annihilation { mode, signe } => Operateur::Annihilation {
                mode,
                signe: -signe,
            },
        }
    }

    /// Adjoint : création ↔ annihilation ; un opérateur générique bascule
    /// son drapeau. Le signe est conservé.
    pub fn dague(self) -> Operateur {
        match self {
            Operateur::Generique { nom, dague, signe } => Operateur::Generique {
                nom,
                dague: !dague,
                signe,
            },
            Operateur::Creation { mode, signe } => Operateur::Annihilation { mode, signe },
            Operateur::Annihilation { mode, signe } => Operateur::Creation { mode, signe },
        }
    }

    /// Application à un état. Les opérateurs fermioniques délèguent à
    /// creer/annihiler (miroir automatique sur les bras) ; un opérateur
    /// générique n'a pas de règle et reste en produit symbolique.
    pub fn appliquer(&self, etat: &Etat) -> Expr {
        match self {
            Operateur::Creation { mode, signe } => etat.creer(mode).fois_signe(*signe),
            Operateur::Annihilation { mode, signe } => etat.annihiler(mode).fois_signe(*signe),
            Operateur::Generique { .. } => Expr::produit(
                Expr::Operateur(self.clone()),
                Expr::Etat(etat.clone()),
            ),
        }
    }
}
