// src/noyau/point_fixe.rs
//
// Itère une passe jusqu'à stabilité STRUCTURELLE : égalité d'arbres (qui
// inclut les signes), pas de comparaison de chaînes. Chaque règle réduit
// strictement une mesure de l'arbre ou le laisse inchangé ; la terminaison
// reste empirique, sans plafond d'itérations arbitraire.

use super::expr::Expr;

pub fn point_fixe(depart: Expr, passe: impl Fn(&Expr) -> Expr) -> Expr {
    let mut courant = depart;
    loop {
        let suivant = passe(&courant);
        if suivant == courant {
            return courant;
        }
        courant = suivant;
    }
}
