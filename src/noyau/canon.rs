// src/noyau/canon.rs
//
// Ordre canonique fermionique.
//
// Trier la séquence des modes occupés par nom croissant en comptant les
// transpositions effectuées : chaque paire d'opérateurs de création voisins
// échangée multiplie l'état par −1, le signe total est donc la parité du
// tri par sélection (une transposition par élément enjambé).

use super::expr::Symbole;
use super::signe::Signe;

/// Renvoie la séquence triée par nom et le signe de la permutation qui y
/// mène. Stable sur les doublons (détectés en aval, pas ici).
pub fn ordonne_modes(modes: &[Symbole]) -> (Vec<Symbole>, Signe) {
    let mut restants: Vec<Symbole> = modes.to_vec();
    let mut tries: Vec<Symbole> = Vec::with_capacity(restants.len());
    let mut transpositions: usize = 0;

    while !restants.is_empty() {
        let mut i_min = 0;
        for (i, m) in restants.iter().enumerate() {
            if m.nom < restants[i_min].nom {
                i_min = i;
            }
        }
        // extraire le minimum en position i_min = i_min transpositions
        transpositions += i_min;
        tries.push(restants.remove(i_min));
    }

    (tries, Signe::depuis_parite(transpositions))
}
