// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - sqrt : fonction préfixée, sortie après la parenthèse fermante de son
//   argument ; sans parenthèses, elle lie le primaire qui suit (même niveau
//   que le moins unaire) : √4+1 = √(4)+1 = 3, √4^2 = (√4)^2
// - Moins unaire : '-' quand on n'attend PAS une valeur devient Neg, qui lie
//   plus serré que ^ et que '!' :
//     -2^2  => (-2)^2 = 4
//     -3!   => (-3)!  = erreur de domaine
//   (mêmes règles d'extraction de signe que le widget d'origine)
// - '^' associatif à droite : 2^3^2 = 2^(3^2) = 512
// - '!' postfixé : sort immédiatement, après avoir dépilé Neg

use super::erreur::ErreurNoyau;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        Tok::Neg | Tok::Sqrt => 4,
        Tok::Bang => 5,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Sqrt, LPar, Num(9), RPar]
///   rpn:    [Num(9), Sqrt]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Sqrt => {
                // préfixe : empilée sans dépiler (chaînable: √√16),
                // sortie après la fermante ou dépilée par précédence
                ops.push(Tok::Sqrt);
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurNoyau::syntaxe("parenthèse fermante sans ouvrante"));
                }

                // si une racine est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Sqrt)) {
                    out.push(ops.pop().unwrap());
                }

                prev_was_value = true;
            }

            Tok::Bang => {
                if !prev_was_value {
                    return Err(ErreurNoyau::numerique("factorielle sans opérande"));
                }

                // postfixé : dépile le moins unaire et la racine non
                // parenthésée (ils lient le primaire), puis sort immédiatement
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&Tok::Neg) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                out.push(Tok::Bang);
                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // moins unaire : préfixe, empilé sans dépiler (chaînable: --2)
                ops.push(Tok::Neg);
                prev_was_value = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => {
                // jamais produit par tokenize()
                return Err(ErreurNoyau::syntaxe("jeton interne inattendu"));
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurNoyau::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurNoyau> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Num(v)),

            Tok::Neg | Tok::Bang | Tok::Sqrt => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurNoyau::numerique("opérateur sans opérande"))?;
                let e = match tok {
                    Tok::Neg => Expr::Neg(Box::new(x)),
                    Tok::Bang => Expr::Fact(Box::new(x)),
                    Tok::Sqrt => Expr::Sqrt(Box::new(x)),
                    _ => unreachable!(),
                };
                st.push(e);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurNoyau::numerique("opérateur sans opérande"))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurNoyau::numerique("opérateur sans opérande"))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurNoyau::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurNoyau::syntaxe("expression invalide"));
    }
    Ok(st.pop().unwrap())
}
