//! The SIRS health compartment enum.
//!
//! A closed enumeration of exactly three states — invalid health values are
//! unrepresentable.  The only legal transitions are S→I (contact-gated
//! infection), I→R (recovery), and R→S (immunity loss); none is terminal,
//! so an agent can cycle through the compartments indefinitely.

/// The health compartment an agent currently occupies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Health {
    Susceptible,
    Infected,
    Recovered,
}

impl Health {
    /// The exact label used in the positions table's `health` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Health::Susceptible => "Susceptible",
            Health::Infected => "Infected",
            Health::Recovered => "Recovered",
        }
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
