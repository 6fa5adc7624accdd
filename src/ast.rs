use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that produces a value: literals, variable
/// references, prefix and infix operations and function calls. Number
/// literals keep their raw lexeme; conversion to `f64` happens when the
/// literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, stored as written (e.g. `"3.14"`).
    Number(String),
    /// A string literal without its quotes.
    String(String),
    /// A boolean literal: `true` or `false`.
    Boolean(bool),
    /// Reference to a variable or function by name.
    Identifier(String),
    /// A prefix operation (e.g. `-5`).
    Prefix {
        /// The operator to apply.
        op:      PrefixOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An infix operation (addition, comparison, etc.).
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    Call {
        /// Name of the function being called.
        callee:    String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a number literal from anything displayable.
    ///
    /// ```
    /// use sprout::ast::Expr;
    ///
    /// assert_eq!(Expr::number(12), Expr::Number("12".to_string()));
    /// ```
    #[must_use]
    pub fn number(value: impl std::fmt::Display) -> Self {
        Self::Number(value.to_string())
    }

    /// Builds an identifier reference.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Builds an infix node from two operands.
    #[must_use]
    pub fn infix(left: Self, op: InfixOperator, right: Self) -> Self {
        Self::Infix { left: Box::new(left),
                      op,
                      right: Box::new(right) }
    }

    /// Builds a prefix node.
    #[must_use]
    pub fn prefix(op: PrefixOperator, operand: Self) -> Self {
        Self::Prefix { op,
                       operand: Box::new(operand) }
    }
}

/// An ordered sequence of statements delimited by braces.
///
/// Blocks do not open a scope of their own: a `let` inside an `if` body is
/// visible after the `if`. Only function calls create scopes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

impl From<Vec<Statement>> for Block {
    fn from(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in call order.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Block,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let`.
    Let {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
    },
    /// Rebinding of an existing variable (`name = value;`).
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// `if (condition) { ... }`
    If {
        /// The condition expression.
        condition: Expr,
        /// Statements run when the condition is truthy.
        body:      Block,
    },
    /// `elif (condition) { ... }`
    Elif {
        /// The condition expression.
        condition: Expr,
        /// Statements run when the condition is truthy.
        body:      Block,
    },
    /// `else { ... }`
    Else {
        /// Statements run when no earlier branch was taken.
        body: Block,
    },
    /// `return value;`
    Return(Expr),
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// A nested `{ ... }` block.
    Block(Block),
    /// A standalone expression evaluated for its side effects.
    Expression(Expr),
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Loose equality (`==`)
    Equal,
    /// Strict inequality (`!=`)
    NotEqual,
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Numeric identity (e.g. `+5`).
    Plus,
    /// Arithmetic negation (e.g. `-5`).
    Negate,
    /// Logical NOT (e.g. `!0`).
    Not,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InfixOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            Or => "||",
            And => "&&",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
