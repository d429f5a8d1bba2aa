//! Tests fuzz : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : evaluer() retourne toujours un texte non vide,
//!   numéral ou sentinelle, et ne panique jamais

use std::time::{Duration, Instant};

use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'entrées ------------------------ */

// L'alphabet exact des boutons du widget.
const TOUCHES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "^", "!", "(",
    ")", "√(",
];

fn gen_sequence_boutons(rng: &mut Rng, max_touches: u32) -> String {
    let n = 1 + rng.pick(max_touches);
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]);
    }
    s
}

// Expressions bien formées (récursif borné) : celles-là ne doivent jamais
// paniquer NI diverger, et un numéral doit parser comme f64 ou être "Error".
fn gen_bien_formee(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return format!("{}", rng.pick(100));
    }
    match rng.pick(6) {
        0 => format!(
            "({}+{})",
            gen_bien_formee(rng, profondeur - 1),
            gen_bien_formee(rng, profondeur - 1)
        ),
        1 => format!(
            "({}-{})",
            gen_bien_formee(rng, profondeur - 1),
            gen_bien_formee(rng, profondeur - 1)
        ),
        2 => format!(
            "({}×{})",
            gen_bien_formee(rng, profondeur - 1),
            gen_bien_formee(rng, profondeur - 1)
        ),
        3 => format!(
            "({}÷{})",
            gen_bien_formee(rng, profondeur - 1),
            gen_bien_formee(rng, profondeur - 1)
        ),
        4 => format!("√({})", gen_bien_formee(rng, profondeur - 1)),
        _ => format!("({}!)", rng.pick(25)),
    }
}

/* ------------------------ Les tests ------------------------ */

#[test]
fn fuzz_sequences_boutons_jamais_de_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0xCA1C_0001);

    for _ in 0..2000 {
        budget(start, max);
        let s = gen_sequence_boutons(&mut rng, 24);
        let r = evaluer(&s);
        assert!(!r.is_empty(), "sortie vide pour {s:?}");
    }
}

#[test]
fn fuzz_bien_formees_numeral_ou_sentinelle() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0xCA1C_0002);

    for _ in 0..500 {
        budget(start, max);
        let s = gen_bien_formee(&mut rng, 4);
        let r = evaluer(&s);

        if r != "Error" {
            // tout résultat non-sentinelle doit être un numéral lisible
            let v: Result<f64, _> = r.parse();
            assert!(v.is_ok(), "sortie non numérale {r:?} pour {s:?}");
        }
    }
}

#[test]
fn fuzz_deterministe() {
    // même seed => mêmes entrées => mêmes sorties
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..200 {
        let sa = gen_sequence_boutons(&mut a, 16);
        let sb = gen_sequence_boutons(&mut b, 16);
        assert_eq!(sa, sb);
        assert_eq!(evaluer(&sa), evaluer(&sb));
    }
}
