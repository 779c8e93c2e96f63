//! Element symbol table.
//!
//! A fixed list of the 118 recognized chemical element symbols, stored in
//! canonical case (uppercase first letter, lowercase second letter). The
//! enumerator only consults it for 2-letter matches; single letters are always
//! accepted as element tokens.

/// All recognized element symbols, ordered by atomic number.
#[rustfmt::skip]
pub const ELEMENTS: &[&str] = &[
    // Period 1
    "H", "He",
    // Period 2
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    // Period 3
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    // Period 4
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se",
    "Br", "Kr",
    // Period 5
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te",
    "I", "Xe",
    // Period 6
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    // Period 7
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No",
    "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Return true if `candidate` is a recognized element symbol.
///
/// The input must already be in canonical case: `"Co"` matches, `"CO"` and
/// `"co"` do not.
pub fn is_element(candidate: &str) -> bool {
    ELEMENTS.contains(&candidate)
}

/// Build the canonical form of a 2-letter symbol from two letters in any case.
pub fn canonical_pair(first: char, second: char) -> String {
    let mut s = String::with_capacity(2);
    s.push(first.to_ascii_uppercase());
    s.push(second.to_ascii_lowercase());
    s
}
