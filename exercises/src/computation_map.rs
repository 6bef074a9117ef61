/// Mapping of modules in exercises/src to type of computation
/// and whether deterministic or stochastic
pub const EXERCISES_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Finance
    ("finance/savings.rs", "Arithmetic formula", "Deterministic"),
    (
        "finance/material_waste.rs",
        "Arithmetic formula",
        "Deterministic",
    ),
    ("finance/interest.rs", "Arithmetic formula", "Deterministic"),
    // Ciphers
    ("cipher/shift.rs", "Letter substitution", "Deterministic"),
    ("cipher/caesar.rs", "Substitution cipher", "Deterministic"),
    (
        "cipher/vigenere.rs",
        "Polyalphabetic substitution",
        "Deterministic",
    ),
    (
        "cipher/scytale.rs",
        "Transposition cipher",
        "Deterministic",
    ),
    // Graph
    (
        "graph/relationship.rs",
        "Adjacency lookup",
        "Deterministic",
    ),
    ("graph/route.rs", "Cycle traversal", "Deterministic"),
    // Board
    (
        "board/tic_tac_toe.rs",
        "Line scan",
        "Deterministic",
    ),
];
