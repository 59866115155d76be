//! Statement execution and expression evaluation.

use hearth_ir::{Expr, Stmt};

use crate::errors::undefined_variable;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{Environment, EvalError, EvalResult, PrintHandler, Value};

/// The tree-walking interpreter.
///
/// Holds the variable environment and the print destination; both persist
/// across `interpret` calls, which is what gives the REPL its session
/// state. The only mutable state is the environment, so re-running the same
/// statements is idempotent up to repeated output.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
    printer: PrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Interpreter::default()
    }

    /// Interpreter with an explicit print destination.
    pub fn with_printer(printer: PrintHandler) -> Self {
        Interpreter {
            environment: Environment::new(),
            printer,
        }
    }

    /// Execute statements in order. The first runtime error aborts: later
    /// statements do not execute, and side effects already performed
    /// (output, definitions) remain.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn printer(&self) -> &PrintHandler {
        &self.printer
    }

    fn execute(&mut self, statement: &Stmt) -> Result<(), EvalError> {
        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
            }
            Stmt::Print { expr } => {
                let value = self.evaluate(expr)?;
                self.printer.print_line(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme.clone(), value);
            }
        }
        Ok(())
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { inner } => self.evaluate(inner),
            Expr::Unary { operator, right } => {
                let value = self.evaluate(right)?;
                evaluate_unary(operator, value)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                // Both operands evaluate before the operator is checked,
                // left first.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(operator, left, right)
            }
            Expr::Variable { name } => self
                .environment
                .get(&name.lexeme)
                .ok_or_else(|| undefined_variable(name)),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment
                    .assign(&name.lexeme, value.clone())
                    .map_err(|_| undefined_variable(name))?;
                Ok(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hearth_diagnostic::DiagnosticSink;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Scan, parse, and interpret `source` with a capturing printer,
    /// returning the captured output or the runtime error.
    fn run(source: &str) -> Result<String, EvalError> {
        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        run_with(&mut interpreter, source)
    }

    fn run_with(interpreter: &mut Interpreter, source: &str) -> Result<String, EvalError> {
        let mut sink = DiagnosticSink::new();
        let tokens = hearth_lexer::scan(source, &mut sink);
        let statements = hearth_parse::parse(tokens, &mut sink);
        assert!(!sink.had_syntax_error(), "syntax errors in {source:?}");
        interpreter.interpret(&statements)?;
        Ok(interpreter.printer().captured().unwrap_or_default())
    }

    #[test]
    fn arithmetic_prints_shortest_form() {
        assert_eq!(run("print 1 + 2 * 3;"), Ok("7\n".to_string()));
        assert_eq!(run("print 7 / 2;"), Ok("3.5\n".to_string()));
    }

    #[test]
    fn subtraction_associates_left() {
        assert_eq!(run("print 10 - 2 - 3;"), Ok("5\n".to_string()));
    }

    #[test]
    fn rerunning_statements_repeats_output_only() {
        let mut sink = DiagnosticSink::new();
        let tokens = hearth_lexer::scan("var x = 1; print x + 1;", &mut sink);
        let statements = hearth_parse::parse(tokens, &mut sink);
        assert!(!sink.had_error());

        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        assert!(interpreter.interpret(&statements).is_ok());
        assert!(interpreter.interpret(&statements).is_ok());
        assert_eq!(
            interpreter.printer().captured().as_deref(),
            Some("2\n2\n")
        );
        assert_eq!(interpreter.environment().len(), 1);
    }

    #[test]
    fn division_by_zero_prints_inf() {
        assert_eq!(run("print 1 / 0;"), Ok("inf\n".to_string()));
    }

    #[test]
    fn string_concatenation_and_display() {
        assert_eq!(
            run("print \"foo\" + \"bar\";"),
            Ok("foobar\n".to_string())
        );
        // No quotes in output.
        assert_eq!(run("print \"hi\";"), Ok("hi\n".to_string()));
    }

    #[test]
    fn variables_define_assign_read() {
        let source = "var x = 1; print x; x = x + 1; print x;";
        assert_eq!(run(source), Ok("1\n2\n".to_string()));
    }

    #[test]
    fn var_without_initializer_is_nil() {
        assert_eq!(run("var x; print x;"), Ok("nil\n".to_string()));
    }

    #[test]
    fn redefinition_changes_type_silently() {
        let source = "var x = 1; var x = \"s\"; print x;";
        assert_eq!(run(source), Ok("s\n".to_string()));
    }

    #[test]
    fn assignment_is_an_expression() {
        let source = "var a = 1; var b = 2; print a = b = 3; print a; print b;";
        assert_eq!(run(source), Ok("3\n3\n3\n".to_string()));
    }

    #[test]
    fn undefined_variable_read_errors() {
        let err = run("print ghost;");
        assert_eq!(
            err.map_err(|e| e.message),
            Err("Undefined variable 'ghost'.".to_string())
        );
    }

    #[test]
    fn assignment_to_undefined_errors() {
        let err = run("ghost = 1;");
        assert_eq!(
            err.map_err(|e| e.message),
            Err("Undefined variable 'ghost'.".to_string())
        );
    }

    #[test]
    fn first_runtime_error_aborts_the_run() {
        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        let err = run_with(&mut interpreter, "print 1; print -\"x\"; print 2;");
        assert!(err.is_err());
        // Output before the error survives; nothing after it runs.
        assert_eq!(
            interpreter.printer().captured().as_deref(),
            Some("1\n")
        );
    }

    #[test]
    fn side_effects_before_error_persist() {
        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        let err = run_with(&mut interpreter, "var x = 5; print ghost;");
        assert!(err.is_err());
        assert_eq!(
            interpreter.environment().get("x"),
            Some(Value::Number(5.0))
        );
    }

    #[test]
    fn environment_persists_across_interpret_calls() {
        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        assert!(run_with(&mut interpreter, "var x = 1;").is_ok());
        assert_eq!(
            run_with(&mut interpreter, "print x;"),
            Ok("1\n".to_string())
        );
    }

    #[test]
    fn truthiness_in_bang() {
        assert_eq!(run("print !nil;"), Ok("true\n".to_string()));
        assert_eq!(run("print !0;"), Ok("false\n".to_string()));
        assert_eq!(run("print !\"\";"), Ok("false\n".to_string()));
    }

    #[test]
    fn comparison_chain_produces_bools() {
        assert_eq!(run("print 1 < 2 == true;"), Ok("true\n".to_string()));
    }

    #[test]
    fn runtime_error_carries_operator_line() {
        let err = run("var x = 1;\nprint x + \"s\";");
        let Err(err) = err else {
            panic!("expected a runtime error");
        };
        assert_eq!(err.token.line, 2);
        assert_eq!(err.message, "Operands must be two numbers or two strings.");
    }
}
