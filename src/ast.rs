use std::fmt;

use crate::interpreter::lexer::Bracket;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of node kinds, so every traversal is an exhaustive
/// `match`. Each variant records the byte offset of the source text it was
/// built from, which evaluation errors report back to the caller.
///
/// Nodes own their children. There is no parent link; traversals that need
/// context carry it down explicitly (see [`Expr::depth`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A prefix operation such as `-x` or `!done`.
    Unary {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
        /// Byte offset of the function name.
        position:  usize,
    },
    /// A bracketed sub-expression, kept so the tree mirrors the source.
    Group {
        /// The bracket shape that delimits the group.
        bracket:  Bracket,
        /// The enclosed expression.
        inner:    Box<Self>,
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// Binding of a name, `name = value`.
    Assign {
        /// The variable being assigned.
        name:     String,
        /// The value expression.
        value:    Box<Self>,
        /// Byte offset of the `=` operator.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use exprkit::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Identifier { position, .. }
            | Self::Unary { position, .. }
            | Self::Binary { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::Group { position, .. }
            | Self::Assign { position, .. } => *position,
        }
    }

    /// Returns the direct children of the node, in evaluation order.
    ///
    /// Leaves have none, unary nodes, groups and assignments have one, binary
    /// nodes have two and calls have one per argument.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Number { .. } | Self::Identifier { .. } => Vec::new(),
            Self::Unary { operand, .. } => vec![operand],
            Self::Group { inner, .. } => vec![inner],
            Self::Assign { value, .. } => vec![value],
            Self::Binary { left, right, .. } => vec![left, right],
            Self::FunctionCall { arguments, .. } => arguments.iter().collect(),
        }
    }

    /// Height of the tree rooted at `self`. A leaf has depth 1.
    ///
    /// ## Example
    /// ```
    /// use exprkit::{interpreter::lexer::tokenize, interpreter::parser::parse};
    ///
    /// let expr = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap();
    /// assert_eq!(expr.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children()
                .into_iter()
                .map(Self::depth)
                .max()
                .unwrap_or(0)
    }

    /// Collects the names of all variables the expression reads, in first-use
    /// order and without duplicates. Assignment targets are not included.
    #[must_use]
    pub fn free_variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Self::Identifier { name, .. } = self
           && !names.contains(&name.as_str())
        {
            names.push(name);
        }
        for child in self.children() {
            child.collect_variables(names);
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**` or `^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Short-circuiting logical and (`&&`)
    And,
    /// Short-circuiting logical or (`||`)
    Or,
    /// Logical and that always evaluates both sides (`&`)
    EagerAnd,
    /// Logical or that always evaluates both sides (`|`)
    EagerOr,
}

/// Represents a prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Identity (`+x`).
    Plus,
    /// Logical NOT (`!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, EagerAnd, EagerOr, Equal, FloorDiv, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
            EagerAnd => "&",
            EagerOr => "|",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Plus => "+",
                        Self::Not => "!",
                    })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => f.write_str(name),
            Self::Unary { op, operand, .. } => write!(f, "{op}{operand}"),
            Self::Binary { left, op, right, .. } => write!(f, "{left} {op} {right}"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
            Self::Group { bracket, inner, .. } => {
                write!(f, "{}{inner}{}", bracket.open_char(), bracket.close_char())
            },
            Self::Assign { name, value, .. } => write!(f, "{name} = {value}"),
        }
    }
}
