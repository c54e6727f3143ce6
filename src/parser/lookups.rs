use std::collections::HashMap;

use lazy_static::lazy_static;

pub type Precedence = u8;

/// Floor passed to the precedence climber for a fresh expression: every
/// operator in the table binds tighter than it.
pub const LOWEST_PRECEDENCE: Precedence = 0;

pub const ASSIGNMENT_OPERATOR: &str = "=";

lazy_static! {
    /// Operator precedence, higher binds tighter.
    pub static ref OP_PRECEDENCE: HashMap<&'static str, Precedence> = {
        let mut map = HashMap::new();
        map.insert("=", 1);

        // Logical
        map.insert("||", 2);
        map.insert("&&", 3);

        // Relational
        map.insert("<", 7);
        map.insert(">", 7);
        map.insert("<=", 7);
        map.insert(">=", 7);
        map.insert("==", 7);
        map.insert("!=", 7);

        // Additive and multiplicative
        map.insert("+", 10);
        map.insert("-", 10);
        map.insert("*", 20);
        map.insert("/", 20);
        map.insert("%", 20);
        map
    };
}

pub fn precedence_of(operator: &str) -> Option<Precedence> {
    OP_PRECEDENCE.get(operator).copied()
}
