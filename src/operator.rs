//! # Operator Model and Registry
//!
//! Every syntactic construct that applies to operands is described by an
//! [`Operator`]: its display name, its syntax shape (prefix, infix, postfix,
//! function call, or special statement syntax), the number of operands it
//! accepts, and a two-sided precedence pair that drives parenthesization
//! during unparsing.
//!
//! ## Precedence Pairs
//!
//! A binary operator carries a *left* and a *right* precedence. The renderer
//! parenthesizes a child exactly when the child's precedence is strictly
//! lower than the ambient bound on the relevant side, so the pair also
//! encodes associativity:
//!
//! - left-associative: `right_prec = left_prec + 1`, forcing parentheses
//!   around a same-precedence right operand (`a - (b - c)`)
//! - right-associative: `left_prec = right_prec + 1`, the mirror image
//!   (`(a ^ b) ^ c`)
//!
//! ## Precedence Scale
//!
//! | Precedence | Operators |
//! |------------|-----------|
//! | 0 | statements (never nest as expressions) |
//! | 10 | OR |
//! | 12 | AND |
//! | 14 | NOT (prefix) |
//! | 16 | =, <>, <, <=, >, >=, LIKE, IS NULL |
//! | 18 | \|\| (concat) |
//! | 20 | +, - (binary) |
//! | 22 | *, /, % |
//! | 24 | ^ (right-associative) |
//! | 26 | - (unary) |
//! | 100 | identifiers, literals, function calls |
//!
//! ## Registry
//!
//! The built-in operators live in [`registry`] as `'static` singletons.
//! Identity comparisons use pointer equality, never name equality, so two
//! operators may share a display name without being confused. Name lookup
//! goes through a compile-time perfect hash table, the same mechanism the
//! lexer layer uses for keyword recognition: O(1), collision-free, and
//! immutable for the life of the process. The table is plain static data and
//! may be shared freely across threads.

use std::fmt;

/// Precedence assigned to atoms: identifiers, literals, function calls.
/// Nothing binds tighter, so such nodes are never parenthesized.
pub const MAX_PRECEDENCE: u32 = 100;

/// How an operator's text interleaves with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `NOT x`
    Prefix,
    /// `x + y`
    Infix,
    /// `x IS NULL`
    Postfix,
    /// `IF(a, b, c)`
    Function,
    /// Statement syntax; each statement definition supplies its own
    /// keyword/operand sequence.
    Special,
}

/// Declared operand arity for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandCount {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl OperandCount {
    pub fn contains(&self, n: usize) -> bool {
        match *self {
            OperandCount::Exact(k) => n == k,
            OperandCount::Range(lo, hi) => n >= lo && n <= hi,
            OperandCount::AtLeast(lo) => n >= lo,
        }
    }
}

impl fmt::Display for OperandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OperandCount::Exact(k) => write!(f, "{}", k),
            OperandCount::Range(lo, hi) => write!(f, "between {} and {}", lo, hi),
            OperandCount::AtLeast(lo) => write!(f, "at least {}", lo),
        }
    }
}

/// Static description of one operator or keyword construct.
#[derive(Debug)]
pub struct Operator {
    pub name: &'static str,
    pub shape: Shape,
    pub left_prec: u32,
    pub right_prec: u32,
    pub operands: OperandCount,
}

impl Operator {
    /// Left-associative binary operator at base precedence `prec`.
    pub const fn infix(name: &'static str, prec: u32) -> Operator {
        Operator {
            name,
            shape: Shape::Infix,
            left_prec: prec,
            right_prec: prec + 1,
            operands: OperandCount::Exact(2),
        }
    }

    /// Right-associative binary operator at base precedence `prec`.
    pub const fn infix_right(name: &'static str, prec: u32) -> Operator {
        Operator {
            name,
            shape: Shape::Infix,
            left_prec: prec + 1,
            right_prec: prec,
            operands: OperandCount::Exact(2),
        }
    }

    pub const fn prefix(name: &'static str, prec: u32) -> Operator {
        Operator {
            name,
            shape: Shape::Prefix,
            left_prec: prec,
            right_prec: prec,
            operands: OperandCount::Exact(1),
        }
    }

    pub const fn postfix(name: &'static str, prec: u32) -> Operator {
        Operator {
            name,
            shape: Shape::Postfix,
            left_prec: prec,
            right_prec: prec,
            operands: OperandCount::Exact(1),
        }
    }

    /// Function-call operator: `NAME(arg, ...)`. Binds like an atom.
    pub const fn function(name: &'static str, operands: OperandCount) -> Operator {
        Operator {
            name,
            shape: Shape::Function,
            left_prec: MAX_PRECEDENCE,
            right_prec: MAX_PRECEDENCE,
            operands,
        }
    }

    /// Statement operator. Statements do not nest as expressions, so both
    /// precedences are zero.
    pub const fn special(name: &'static str, operands: OperandCount) -> Operator {
        Operator {
            name,
            shape: Shape::Special,
            left_prec: 0,
            right_prec: 0,
            operands,
        }
    }

    /// Whether a call under this operator must be parenthesized when it
    /// appears in a context with the given ambient precedence bounds.
    pub fn needs_parens(&self, ambient_left: u32, ambient_right: u32) -> bool {
        self.left_prec < ambient_left || self.right_prec < ambient_right
    }

    /// Whether `n` operands satisfy this operator's declared count.
    pub fn accepts(&self, n: usize) -> bool {
        self.operands.contains(n)
    }
}

/// Built-in operator singletons and name lookup.
pub mod registry {
    use super::{OperandCount, Operator};
    use phf::phf_map;

    pub static OR: Operator = Operator::infix("OR", 10);
    pub static AND: Operator = Operator::infix("AND", 12);
    pub static NOT: Operator = Operator::prefix("NOT", 14);

    pub static EQ: Operator = Operator::infix("=", 16);
    pub static NOT_EQ: Operator = Operator::infix("<>", 16);
    pub static LT: Operator = Operator::infix("<", 16);
    pub static LT_EQ: Operator = Operator::infix("<=", 16);
    pub static GT: Operator = Operator::infix(">", 16);
    pub static GT_EQ: Operator = Operator::infix(">=", 16);
    pub static LIKE: Operator = Operator::infix("LIKE", 16);
    pub static IS_NULL: Operator = Operator::postfix("IS NULL", 16);
    pub static IS_NOT_NULL: Operator = Operator::postfix("IS NOT NULL", 16);

    pub static CONCAT: Operator = Operator::infix("||", 18);
    pub static PLUS: Operator = Operator::infix("+", 20);
    pub static MINUS: Operator = Operator::infix("-", 20);
    pub static MULTIPLY: Operator = Operator::infix("*", 22);
    pub static DIVIDE: Operator = Operator::infix("/", 22);
    pub static MODULO: Operator = Operator::infix("%", 22);
    pub static POWER: Operator = Operator::infix_right("^", 24);
    pub static UNARY_MINUS: Operator = Operator::prefix("-", 26);

    pub static IF: Operator = Operator::function("IF", OperandCount::Exact(3));
    pub static TRY_CAST: Operator = Operator::function("TRY_CAST", OperandCount::Exact(2));
    pub static COALESCE: Operator = Operator::function("COALESCE", OperandCount::AtLeast(1));

    static BY_NAME: phf::Map<&'static str, &'static Operator> = phf_map! {
        "OR" => &OR,
        "AND" => &AND,
        "NOT" => &NOT,
        "=" => &EQ,
        "<>" => &NOT_EQ,
        "<" => &LT,
        "<=" => &LT_EQ,
        ">" => &GT,
        ">=" => &GT_EQ,
        "LIKE" => &LIKE,
        "IS NULL" => &IS_NULL,
        "IS NOT NULL" => &IS_NOT_NULL,
        "||" => &CONCAT,
        "+" => &PLUS,
        "-" => &MINUS,
        "*" => &MULTIPLY,
        "/" => &DIVIDE,
        "%" => &MODULO,
        "^" => &POWER,
        "IF" => &IF,
        "TRY_CAST" => &TRY_CAST,
        "COALESCE" => &COALESCE,
    };

    /// Resolve a display name to its registry entry. Word names are matched
    /// case-insensitively; symbolic names must match exactly. The binary `-`
    /// shadows the unary form, which has no distinct display name.
    pub fn lookup(name: &str) -> Option<&'static Operator> {
        if let Some(op) = BY_NAME.get(name) {
            return Some(*op);
        }
        BY_NAME.get(name.to_ascii_uppercase().as_str()).copied()
    }
}
