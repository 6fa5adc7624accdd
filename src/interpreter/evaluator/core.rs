use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{scope::Scope, value::core::Value},
    util::num::parse_number_lexeme,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement or block finished.
///
/// A `return` anywhere inside nested blocks produces
/// [`Completion::Returned`], which every enclosing block passes upward
/// without running its remaining statements. The enclosing function call
/// (or [`evaluate_program`]) unwraps it.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Execution reached the end without a `return`.
    Normal,
    /// A `return` statement produced this value.
    Returned(Value),
}

impl Completion {
    /// Unwraps a returned value, or `undefined` when nothing was returned.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Normal => Value::Undefined,
            Self::Returned(value) => value,
        }
    }
}

/// Executes a program in the given scope.
///
/// Statements run in order. The first `return` reached at the top level
/// stops execution and its value is returned; `None` means the program ran
/// to the end without returning.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised by any statement. Bindings made
/// before the failure stay in `scope`.
///
/// # Example
/// ```
/// use sprout::interpreter::{
///     evaluator::core::evaluate_program, lexer::tokenize, parser::core::parse, scope::Scope,
///     value::core::Value,
/// };
///
/// let tokens = tokenize("function add(a, b) { return a + b; } let c = add(1, 2); return c;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let result = evaluate_program(&program, &Scope::new()).unwrap();
/// assert_eq!(result, Some(Value::Number(3.0)));
/// ```
pub fn evaluate_program(statements: &[Statement], scope: &Scope<'_>) -> EvalResult<Option<Value>> {
    match scope.eval_statements(statements)? {
        Completion::Normal => Ok(None),
        Completion::Returned(value) => Ok(Some(value)),
    }
}

impl Scope<'_> {
    /// Evaluates a single statement on its own.
    ///
    /// An `elif` or `else` evaluated this way has no preceding branch to
    /// consult and behaves as if none was taken.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Completion> {
        let mut branch_taken = false;
        self.exec_statement(statement, &mut branch_taken)
    }

    /// Evaluates the statements of a block in this scope.
    ///
    /// Blocks do not create a scope. The first statement that returns stops
    /// the block and its completion is passed up.
    pub fn eval_block(&self, block: &Block) -> EvalResult<Completion> {
        self.eval_statements(&block.statements)
    }

    /// Runs a statement list, threading `if`/`elif`/`else` chain state.
    pub(crate) fn eval_statements(&self, statements: &[Statement]) -> EvalResult<Completion> {
        let mut branch_taken = false;

        for statement in statements {
            if let Completion::Returned(value) = self.exec_statement(statement, &mut branch_taken)? {
                return Ok(Completion::Returned(value));
            }
        }

        Ok(Completion::Normal)
    }

    /// Executes one statement.
    ///
    /// `branch_taken` records whether the current conditional chain already
    /// ran a body. `elif` and `else` consult it; every other statement ends
    /// the chain.
    fn exec_statement(&self,
                      statement: &Statement,
                      branch_taken: &mut bool)
                      -> EvalResult<Completion> {
        match statement {
            Statement::If { condition, body } => {
                *branch_taken = self.eval_expression(condition)?.is_truthy();
                self.eval_branch(*branch_taken, body)
            },
            Statement::Elif { condition, body } => {
                if *branch_taken {
                    return Ok(Completion::Normal);
                }
                *branch_taken = self.eval_expression(condition)?.is_truthy();
                self.eval_branch(*branch_taken, body)
            },
            Statement::Else { body } => {
                let run = !*branch_taken;
                *branch_taken = false;
                self.eval_branch(run, body)
            },
            _ => {
                *branch_taken = false;
                self.exec_simple_statement(statement)
            },
        }
    }

    fn eval_branch(&self, run: bool, body: &Block) -> EvalResult<Completion> {
        if run {
            self.eval_block(body)
        } else {
            Ok(Completion::Normal)
        }
    }

    /// Executes every statement kind that is not part of a conditional chain.
    fn exec_simple_statement(&self, statement: &Statement) -> EvalResult<Completion> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value)?;

                if self.is_defined(name) {
                    return Err(RuntimeError::Redefinition { name: name.clone() });
                }

                self.define(name.clone(), value);
                Ok(Completion::Normal)
            },
            Statement::Assign { name, value } => {
                let value = self.eval_expression(value)?;

                if !self.assign(name, value) {
                    return Err(RuntimeError::UndefinedIdentifier { name: name.clone() });
                }

                Ok(Completion::Normal)
            },
            Statement::Return(expr) => {
                let value = self.eval_expression(expr)?;

                if value.is_callable() {
                    return Err(RuntimeError::IllegalReturnValue { kind: value.type_name() });
                }

                Ok(Completion::Returned(value))
            },
            Statement::Function(def) => {
                if self.is_defined(&def.name) {
                    debug!(name = %def.name, "name already bound, function definition ignored");
                } else {
                    self.define(def.name.clone(), Value::Function(Rc::clone(def)));
                }
                Ok(Completion::Normal)
            },
            Statement::Block(block) => self.eval_block(block),
            Statement::Expression(expr) => {
                self.eval_expression(expr)?;
                Ok(Completion::Normal)
            },
            Statement::If { .. } | Statement::Elif { .. } | Statement::Else { .. } => {
                self.eval_statement(statement)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Number
    /// literals are converted from their lexeme here, identifiers are
    /// resolved through the scope chain, and operators and calls are
    /// delegated to their own evaluators.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::{Expr, InfixOperator},
    ///     interpreter::{scope::Scope, value::core::Value},
    /// };
    ///
    /// let expr = Expr::infix(Expr::number(1), InfixOperator::Add, Expr::number(2));
    ///
    /// assert_eq!(Scope::new().eval_expression(&expr).unwrap(), Value::Number(3.0));
    /// ```
    pub fn eval_expression(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number(lexeme) => Ok(Value::Number(parse_number_lexeme(lexeme)?)),
            Expr::String(text) => Ok(Value::String(text.clone())),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::Identifier(name) => self.eval_identifier(name),
            Expr::Prefix { op, operand } => self.eval_prefix_op(*op, operand),
            Expr::Infix { left, op, right } => self.eval_infix_op(left, *op, right),
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments),
        }
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedIdentifier`] when no scope in the
    /// chain binds `name`.
    pub fn eval_identifier(&self, name: &str) -> EvalResult<Value> {
        self.resolve(name)
            .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string() })
    }
}
