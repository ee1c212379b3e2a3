use std::{collections::HashMap, fmt};

use log::trace;

use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::{
        evaluator::function::{builtin, log as logarithm, min_max, sqrt},
        value::Value,
    },
};

/// Type alias for function handlers.
///
/// A function receives a slice of evaluated argument values and the source
/// position of the call.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
/// - `AtLeast(n)` means `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed argument counts.
    OneOf(&'static [usize]),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn accepts(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

/// An entry in a [`FunctionTable`].
#[derive(Clone, Copy)]
pub struct FunctionDef {
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table that seeds [`FunctionTable::builtin`]),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, FunctionDef)] = &[
            $(
                ($name, FunctionDef { arity: $arity, func: $func }),
            )*
        ];
        /// Names of every built-in function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"    => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"    => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"    => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"   => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"   => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"   => { arity: Arity::Exact(1), func: builtin::atan },
    "sinh"   => { arity: Arity::Exact(1), func: builtin::sinh },
    "cosh"   => { arity: Arity::Exact(1), func: builtin::cosh },
    "tanh"   => { arity: Arity::Exact(1), func: builtin::tanh },
    "exp"    => { arity: Arity::Exact(1), func: builtin::exp },
    "cbrt"   => { arity: Arity::Exact(1), func: builtin::cbrt },
    "abs"    => { arity: Arity::Exact(1), func: builtin::abs },
    "floor"  => { arity: Arity::Exact(1), func: builtin::floor },
    "ceil"   => { arity: Arity::Exact(1), func: builtin::ceil },
    "round"  => { arity: Arity::Exact(1), func: builtin::round },
    "trunc"  => { arity: Arity::Exact(1), func: builtin::trunc },
    "sign"   => { arity: Arity::Exact(1), func: builtin::sign },
    "pow"    => { arity: Arity::Exact(2), func: builtin::pow },
    "atan2"  => { arity: Arity::Exact(2), func: builtin::atan2 },
    "hypot"  => { arity: Arity::Exact(2), func: builtin::hypot },
    "assert" => { arity: Arity::Exact(1), func: builtin::assert_fn },
    "sqrt"   => { arity: Arity::OneOf(&[1, 2]), func: sqrt::sqrt },
    "ln"     => { arity: Arity::Exact(1), func: logarithm::ln },
    "log2"   => { arity: Arity::Exact(1), func: logarithm::log2 },
    "log10"  => { arity: Arity::Exact(1), func: logarithm::log10 },
    "log"    => { arity: Arity::OneOf(&[1, 2]), func: logarithm::log },
    "min"    => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("min", args, position) },
    "max"    => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("max", args, position) },
}

/// The functions an [`crate::interpreter::evaluator::Evaluator`] can call.
///
/// A table is assembled up front and then handed to the evaluator, which
/// never modifies it.
///
/// # Example
/// ```
/// use exprkit::interpreter::{
///     evaluator::function::core::{Arity, FunctionTable},
///     value::Value,
/// };
///
/// let table = FunctionTable::builtin().with("answer", Arity::Exact(0), |_, _| Ok(Value::Number(42.0)));
///
/// assert!(table.contains("sqrt"));
/// assert_eq!(table.call("answer", &[], 0).unwrap(), Value::Number(42.0));
/// ```
#[derive(Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, FunctionDef>,
}

impl FunctionTable {
    /// Creates a table with no functions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table holding every built-in function.
    #[must_use]
    pub fn builtin() -> Self {
        Self { functions: BUILTIN_TABLE.iter()
                                       .map(|(name, def)| ((*name).to_string(), *def))
                                       .collect(), }
    }

    /// Adds or replaces a function, returning the extended table.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, arity: Arity, func: BuiltinFn) -> Self {
        self.functions.insert(name.into(), FunctionDef { arity, func });
        self
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Whether a function called `name` is in the table.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Function names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Calls a function by name.
    ///
    /// The arity is checked before the function runs.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if `name` is not in the table.
    /// - [`RuntimeError::ArgumentCountMismatch`] if the arity does not accept
    ///   `args.len()`.
    /// - Whatever the function itself returns.
    pub fn call(&self, name: &str, args: &[Value], position: usize) -> EvalResult<Value> {
        let def = self.get(name)
                      .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                     position })?;

        if !def.arity.accepts(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             found: args.len(),
                                                             position });
        }

        trace!("calling {name} with {} argument(s)", args.len());
        (def.func)(args, position)
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
