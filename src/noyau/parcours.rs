// src/noyau/parcours.rs
//
// Parcours postfixe itératif (pile explicite, profondeur bornée par le tas) :
// reconstruit l'arbre enfants d'abord, puis applique une réécriture locale à
// chaque nœud reconstruit. Une réécriture qui crée un nouveau motif n'est pas
// re-visitée dans la même passe ; c'est le point fixe qui itère.

use super::expr::Expr;
use super::signe::Signe;

enum Marque {
    Entrer(Expr),
    SortirSomme(Signe),
    SortirProduit(Signe),
}

/// Applique `reecrit` à chaque nœud (feuilles comprises), enfants d'abord.
pub fn parcours_postfixe(expr: &Expr, reecrit: impl Fn(Expr) -> Expr) -> Expr {
    let mut pile: Vec<Marque> = vec![Marque::Entrer(expr.clone())];
    let mut resultats: Vec<Expr> = Vec::new();

    while let Some(marque) = pile.pop() {
        match marque {
            Marque::Entrer(e) => match e {
                Expr::Somme(g, d, s) => {
                    pile.push(Marque::SortirSomme(s));
                    pile.push(Marque::Entrer(*d));
                    pile.push(Marque::Entrer(*g));
                }
                Expr::Produit(g, d, s) => {
                    pile.push(Marque::SortirProduit(s));
                    pile.push(Marque::Entrer(*d));
                    pile.push(Marque::Entrer(*g));
                }
                feuille => resultats.push(reecrit(feuille)),
            },
            Marque::SortirSomme(s) => {
                let (g, d) = depile_deux(&mut resultats);
                resultats.push(reecrit(Expr::somme(g, d).fois_signe(s)));
            }
            Marque::SortirProduit(s) => {
                let (g, d) = depile_deux(&mut resultats);
                resultats.push(reecrit(Expr::produit(g, d).fois_signe(s)));
            }
        }
    }

    match resultats.pop() {
        Some(racine) if resultats.is_empty() => racine,
        _ => panic!("parcours postfixe : pile de résultats incohérente"),
    }
}

fn depile_deux(resultats: &mut Vec<Expr>) -> (Expr, Expr) {
    match (resultats.pop(), resultats.pop()) {
        (Some(d), Some(g)) => (g, d),
        _ => panic!("parcours postfixe : arité incohérente"),
    }
}
