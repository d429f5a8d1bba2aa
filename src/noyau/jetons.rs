// src/noyau/jetons.rs

use super::erreur::ErreurNoyau;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Bang,  // ! (postfixé)

    // √ / "sqrt" : fonction préfixée, liée au primaire qui suit
    Sqrt,

    // Moins unaire — jamais produit par tokenize(), injecté par to_rpn().
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 2.5, .5)
/// - notation scientifique dans un numéral (ex: 1.2e-5, 2.400000e15) —
///   indispensable pour ré-évaluer un résultat rappelé via Ans
/// - opérateurs + - * / ^ !
/// - glyphes d'affichage × ÷ √ (normalisés ici même: ×→*, ÷→/, √→sqrt)
/// - parenthèses ( )
/// - le mot "sqrt" (insensible à la casse)
///
/// Multiplication implicite, insérée au fil de la tokenisation
/// (politique unique pour les deux variantes de présentation) :
/// - numéral, ')' ou '!' suivi de '(' ou d'une racine ("2(3+4)", "2√(9)")
/// - '!' suivi d'un numéral commençant par un CHIFFRE ("3!2" => 3!*2) ;
///   un numéral en ".5" n'en reçoit PAS : "3!.5" reste une adjacence
///   invalide et échoue plus loin
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            mult_implicite_avant_groupe(&mut out);
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs (formes canoniques + glyphes d'affichage)
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' | '×' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' | '÷' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '!' => {
                out.push(Tok::Bang);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Racine carrée unicode : √ => sqrt
        if c == '√' {
            mult_implicite_avant_groupe(&mut out);
            out.push(Tok::Sqrt);
            i += 1;
            continue;
        }

        // Mot ASCII : seul "sqrt" est reconnu (pas de variables ni d'autres fonctions)
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if word.to_lowercase() == "sqrt" {
                mult_implicite_avant_groupe(&mut out);
                out.push(Tok::Sqrt);
                continue;
            }
            return Err(ErreurNoyau::syntaxe(format!("mot inconnu: '{word}'")));
        }

        // Numéral : chiffres, '.', exposant scientifique optionnel
        if c.is_ascii_digit() || c == '.' {
            // '!' suivi d'un chiffre : multiplication implicite ("3!2").
            // Un numéral commençant par '.' ne la déclenche pas ("3!.5").
            if c.is_ascii_digit() && matches!(out.last(), Some(Tok::Bang)) {
                out.push(Tok::Star);
            }

            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            // exposant: 'e'/'E' suivi d'un chiffre ou d'un signe puis d'un chiffre
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let apres_e = i + 1;
                let apres_signe =
                    if apres_e < chars.len() && (chars[apres_e] == '+' || chars[apres_e] == '-') {
                        apres_e + 1
                    } else {
                        apres_e
                    };
                if apres_signe < chars.len() && chars[apres_signe].is_ascii_digit() {
                    i = apres_signe + 1;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }

            let texte: String = chars[start..i].iter().collect();
            let v: f64 = texte
                .parse()
                .map_err(|_| ErreurNoyau::numerique(format!("numéral mal formé: '{texte}'")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurNoyau::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Star implicite devant '(' ou une racine, après un numéral, ')' ou '!'.
fn mult_implicite_avant_groupe(out: &mut Vec<Tok>) {
    if matches!(out.last(), Some(Tok::Num(_) | Tok::RPar | Tok::Bang)) {
        out.push(Tok::Star);
    }
}

/// Format utilitaire (tests) : liste de jetons en texte.
#[cfg(test)]
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),

            Tok::Sqrt => "sqrt".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
