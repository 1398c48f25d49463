use tracing::trace;

use crate::{
    automaton::{Alphabet, Automaton, DefaultIdType, StateId},
    Symbol,
};

/// Uses a sprout-like algorithm to generate a random automaton in which every state is reachable
/// from the initial state. `symbols` determines the number of distinct symbols, `probability` determines
/// the probability of a back edge to some state being inserted and every state is assigned a behavior
/// drawn uniformly from `0..behaviors`. The algorithm is as follows:
/// 1. Start with a single state.
/// 2. For each symbol, go through the existing states in order and with probability `probability`
///    add a back edge to that state.
/// 3. If no back edge to some state was added, we insert an edge to a new state.
/// 4. Repeat until all states and symbols have been treated.
pub fn generate_random_automaton(
    symbols: usize,
    probability: f64,
    behaviors: usize,
) -> Automaton<char, usize> {
    assert!(behaviors > 0, "at least one behavior is needed");
    let alphabet = Alphabet::of_size(symbols);
    let mut automaton = Automaton::for_alphabet(alphabet.clone());

    let initial = automaton.add_state(fastrand::usize(..behaviors));
    let mut current = 0;

    while current < automaton.size() {
        let origin = StateId::from_usize(current);
        'symbols: for symbol in alphabet.universe() {
            for target in 0..=current {
                if fastrand::f64() < probability {
                    automaton.add_transition(origin, *symbol, StateId::from_usize(target));
                    continue 'symbols;
                }
            }
            // no target was found so we create it
            let target = automaton.add_state(fastrand::usize(..behaviors));
            automaton.add_transition(origin, *symbol, target);
        }
        current += 1;
    }
    automaton.set_initial(initial);

    trace!("generated random automaton with {} states", automaton.size());
    automaton
}

/// Generates a random automaton with `size` states by randomly drawing transitions. For every state and
/// every one of the `symbols` symbols, a transition to a uniformly drawn target is added with probability
/// `density`, otherwise the transition is left out. Every state is assigned a behavior drawn uniformly from
/// `0..behaviors` and the first state is initial. Depending on the drawn transitions, some states may not
/// be reachable.
pub fn generate_random_automaton_sized(
    symbols: usize,
    size: usize,
    behaviors: usize,
    density: f64,
) -> Automaton<char, usize> {
    assert!(size > 0, "cannot generate an automaton without states");
    assert!(behaviors > 0, "at least one behavior is needed");
    let bound = DefaultIdType::try_from(size).expect("size does not fit into the id type");
    let alphabet = Alphabet::of_size(symbols);
    let mut automaton = Automaton::for_alphabet(alphabet.clone());
    for _ in 0..size {
        automaton.add_state(fastrand::usize(..behaviors));
    }
    for q in 0..size {
        for symbol in alphabet.universe() {
            if fastrand::f64() < density {
                let target = fastrand::u32(..bound);
                automaton.add_transition(StateId::from_usize(q), *symbol, StateId::new(target));
            }
        }
    }
    automaton.set_initial(StateId::new(0));
    automaton
}

/// Generate a random word over the universe of the `alphabet`.
/// The length of the word is drawn uniformly from the range `min_len..=max_len`.
pub fn generate_random_word<S: Symbol>(
    alphabet: &Alphabet<S>,
    min_len: usize,
    max_len: usize,
) -> Vec<S> {
    assert!(!alphabet.is_empty(), "cannot draw symbols from an empty alphabet");
    let length = fastrand::usize(min_len..=max_len);
    (0..length)
        .map(|_| {
            alphabet
                .get(fastrand::usize(..alphabet.size()))
                .expect("position is in range")
                .clone()
        })
        .collect()
}
