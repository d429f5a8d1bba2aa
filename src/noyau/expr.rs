// src/noyau/expr.rs
//
// AST de la calculatrice (flottants f64).
// - Num  : littéral décimal (ou scientifique) déjà résolu
// - Neg  : moins unaire (collé au primaire qui suit, plus serré que ^ et !)
// - Sqrt : racine carrée
// - Fact : factorielle postfixée
// - Pow  : exposant, associatif à droite
//
// L'arbre remplace la réécriture de chaîne du widget d'origine : aucun état
// partagé, un curseur de parse explicite côté rpn.rs, évaluation séparée
// côté eval.rs.

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Neg(Box<Expr>),
    Sqrt(Box<Expr>),
    Fact(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}
