// src/noyau/signe.rs
//
// Signe multiplicatif {+, −} : le groupe à deux éléments porté par chaque
// nœud de l'arbre. Fixé à la construction du nœud, combiné par
// multiplication, jamais muté sur place.

use std::ops::{Mul, Neg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signe {
    Positif,
    Negatif,
}

impl Signe {
    pub fn est_negatif(self) -> bool {
        self == Signe::Negatif
    }

    pub fn en_entier(self) -> i64 {
        match self {
            Signe::Positif => 1,
            Signe::Negatif => -1,
        }
    }

    /// Signe d'un entier (zéro compte positif).
    pub fn depuis_entier(n: i64) -> Signe {
        if n < 0 {
            Signe::Negatif
        } else {
            Signe::Positif
        }
    }

    /// Signe d'une permutation : (−1)^transpositions.
    pub fn depuis_parite(transpositions: usize) -> Signe {
        if transpositions % 2 == 0 {
            Signe::Positif
        } else {
            Signe::Negatif
        }
    }
}

impl Mul for Signe {
    type Output = Signe;

    fn mul(self, rhs: Signe) -> Signe {
        if self == rhs {
            Signe::Positif
        } else {
            Signe::Negatif
        }
    }
}

impl Neg for Signe {
    type Output = Signe;

    fn neg(self) -> Signe {
        match self {
            Signe::Positif => Signe::Negatif,
            Signe::Negatif => Signe::Positif,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Signe;

    #[test]
    fn groupe_a_deux_elements() {
        assert_eq!(Signe::Positif * Signe::Positif, Signe::Positif);
        assert_eq!(Signe::Positif * Signe::Negatif, Signe::Negatif);
        assert_eq!(Signe::Negatif * Signe::Positif, Signe::Negatif);
        assert_eq!(Signe::Negatif * Signe::Negatif, Signe::Positif);
    }

    #[test]
    fn negation_involutive() {
        assert_eq!(-(-Signe::Negatif), Signe::Negatif);
        assert_eq!(-Signe::Positif, Signe::Negatif);
    }

    #[test]
    fn conversions_entieres() {
        assert_eq!(Signe::depuis_entier(3), Signe::Positif);
        assert_eq!(Signe::depuis_entier(-3), Signe::Negatif);
        assert_eq!(Signe::depuis_entier(0), Signe::Positif);
        assert_eq!(Signe::Negatif.en_entier(), -1);
    }

    #[test]
    fn parite_des_transpositions() {
        assert_eq!(Signe::depuis_parite(0), Signe::Positif);
        assert_eq!(Signe::depuis_parite(1), Signe::Negatif);
        assert_eq!(Signe::depuis_parite(2), Signe::Positif);
        assert_eq!(Signe::depuis_parite(7), Signe::Negatif);
    }
}
