//! Interpreter tests over hand-built expression trees.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use inter_ir::{
    BinaryOp, Binding, ExprArena, ExprId, ExprKind, Literal, LogicalOp, StringInterner, UnaryOp,
};
use pretty_assertions::assert_eq;

use super::Interpreter;
use crate::{Environment, EvalErrorKind, EvalResult, Value, ValueKind};

/// Builds expression trees directly in an arena.
struct Tree {
    arena: ExprArena,
    interner: StringInterner,
}

impl Tree {
    fn new() -> Self {
        Tree {
            arena: ExprArena::new(),
            interner: StringInterner::new(),
        }
    }

    fn num(&mut self, n: i64) -> ExprId {
        self.arena.alloc_expr(ExprKind::Literal(Literal::Number(n)))
    }

    fn boolean(&mut self, b: bool) -> ExprId {
        self.arena.alloc_expr(ExprKind::Literal(Literal::Bool(b)))
    }

    fn ident(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::Ident(name))
    }

    fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Unary { op, operand })
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Binary { op, left, right })
    }

    fn logical(&mut self, op: LogicalOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Logical { op, left, right })
    }

    fn cond(&mut self, test: ExprId, consequent: ExprId, alternate: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Conditional {
            test,
            consequent,
            alternate,
        })
    }

    fn bind(&mut self, pairs: &[(&str, ExprId)]) -> ExprId {
        let bindings: Vec<Binding> = pairs
            .iter()
            .map(|&(name, init)| Binding {
                name: self.interner.intern(name),
                init,
            })
            .collect();
        let range = self.arena.alloc_bindings(bindings);
        self.arena.alloc_expr(ExprKind::Bind(range))
    }

    fn function(&mut self, param: &str, body: ExprId) -> ExprId {
        let param = self.interner.intern(param);
        self.arena.alloc_expr(ExprKind::Function { param, body })
    }

    fn call(&mut self, callee: ExprId, argument: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Call { callee, argument })
    }

    fn assign(&mut self, target: &str, value: ExprId) -> ExprId {
        let target = self.interner.intern(target);
        self.arena.alloc_expr(ExprKind::Assign { target, value })
    }

    fn block(&mut self, stmts: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(stmts.iter().copied());
        self.arena.alloc_expr(ExprKind::Block(range))
    }

    fn malformed(&mut self, token: &str) -> ExprId {
        let token = self.interner.intern(token);
        self.arena.alloc_expr(ExprKind::Malformed { token })
    }

    fn run(&self, stmts: &[ExprId]) -> EvalResult {
        let mut interpreter = Interpreter::new(&self.arena, &self.interner);
        let mut env = Environment::new();
        interpreter.eval_statements(stmts, &mut env)
    }
}

fn unbound(name: &str) -> EvalErrorKind {
    EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    }
}

#[test]
fn test_bind_then_add() {
    let mut t = Tree::new();
    let ten = t.num(10);
    let bind = t.bind(&[("x", ten)]);
    let x = t.ident("x");
    let five = t.num(5);
    let sum = t.binary(BinaryOp::Add, x, five);
    assert_eq!(t.run(&[bind, sum]).unwrap(), Value::Number(15));
}

#[test]
fn test_bind_is_sequential() {
    let mut t = Tree::new();
    let one = t.num(1);
    let a = t.ident("a");
    let two = t.num(2);
    let a_times_two = t.binary(BinaryOp::Mul, a, two);
    let bind = t.bind(&[("a", one), ("b", a_times_two)]);
    let b = t.ident("b");
    assert_eq!(t.run(&[bind, b]).unwrap(), Value::Number(2));
}

#[test]
fn test_bind_and_assign_yield_void() {
    let mut t = Tree::new();
    let one = t.num(1);
    let bind = t.bind(&[("x", one)]);
    assert_eq!(t.run(&[bind]).unwrap(), Value::Void);

    let two = t.num(2);
    let assign = t.assign("x", two);
    assert_eq!(t.run(&[bind, assign]).unwrap(), Value::Void);
}

#[test]
fn test_empty_program_is_void() {
    let t = Tree::new();
    assert_eq!(t.run(&[]).unwrap(), Value::Void);
}

mod scoping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shadowing_keeps_captured_cell() {
        let mut t = Tree::new();
        let one = t.num(1);
        let first = t.bind(&[("x", one)]);
        let x_in_body = t.ident("x");
        let getter = t.function("_", x_in_body);
        let bind_f = t.bind(&[("f", getter)]);
        let two = t.num(2);
        let second = t.bind(&[("x", two)]);
        let x = t.ident("x");
        let f = t.ident("f");
        let zero = t.num(0);
        let call = t.call(f, zero);

        assert_eq!(
            t.run(&[first, bind_f, second, x]).unwrap(),
            Value::Number(2)
        );
        assert_eq!(
            t.run(&[first, bind_f, second, call]).unwrap(),
            Value::Number(1)
        );
    }

    #[test]
    fn assignment_is_visible_to_closures() {
        let mut t = Tree::new();
        let one = t.num(1);
        let bind_x = t.bind(&[("x", one)]);
        let x_in_body = t.ident("x");
        let getter = t.function("_", x_in_body);
        let bind_f = t.bind(&[("f", getter)]);
        let ninety_nine = t.num(99);
        let assign = t.assign("x", ninety_nine);
        let f = t.ident("f");
        let zero = t.num(0);
        let call = t.call(f, zero);

        assert_eq!(
            t.run(&[bind_x, bind_f, assign, call]).unwrap(),
            Value::Number(99)
        );
    }

    #[test]
    fn block_bindings_stay_local() {
        let mut t = Tree::new();
        let one = t.num(1);
        let outer = t.bind(&[("x", one)]);
        let two = t.num(2);
        let inner = t.bind(&[("x", two)]);
        let inner_x = t.ident("x");
        let block = t.block(&[inner, inner_x]);
        let outer_x = t.ident("x");

        assert_eq!(t.run(&[outer, block]).unwrap(), Value::Number(2));
        assert_eq!(t.run(&[outer, block, outer_x]).unwrap(), Value::Number(1));
    }

    #[test]
    fn block_assignment_reaches_outer_cell() {
        let mut t = Tree::new();
        let one = t.num(1);
        let outer = t.bind(&[("x", one)]);
        let five = t.num(5);
        let assign = t.assign("x", five);
        let block = t.block(&[assign]);
        let x = t.ident("x");

        assert_eq!(t.run(&[outer, block, x]).unwrap(), Value::Number(5));
    }

    #[test]
    fn bind_in_expression_position_is_discarded() {
        let mut t = Tree::new();
        let yes = t.boolean(true);
        let one = t.num(1);
        let bind = t.bind(&[("q", one)]);
        let zero = t.num(0);
        let cond = t.cond(yes, bind, zero);
        let q = t.ident("q");

        assert_eq!(t.run(&[cond]).unwrap(), Value::Void);
        assert_eq!(t.run(&[cond, q]).unwrap_err().kind, unbound("q"));
    }

    #[test]
    fn closure_body_uses_captured_scope() {
        let mut t = Tree::new();
        let one = t.num(1);
        let bind_y = t.bind(&[("y", one)]);
        let y_in_body = t.ident("y");
        let getter = t.function("p", y_in_body);
        let bind_f = t.bind(&[("f", getter)]);
        let hundred = t.num(100);
        let rebind_y = t.bind(&[("y", hundred)]);
        let f = t.ident("f");
        let y_arg = t.ident("y");
        let call = t.call(f, y_arg);
        let block = t.block(&[rebind_y, call]);

        assert_eq!(t.run(&[bind_y, bind_f, block]).unwrap(), Value::Number(1));
    }

    #[test]
    fn argument_uses_caller_scope() {
        let mut t = Tree::new();
        let p = t.ident("p");
        let identity = t.function("p", p);
        let bind_f = t.bind(&[("f", identity)]);
        let seven = t.num(7);
        let bind_z = t.bind(&[("z", seven)]);
        let f = t.ident("f");
        let z = t.ident("z");
        let call = t.call(f, z);
        let block = t.block(&[bind_z, call]);

        assert_eq!(t.run(&[bind_f, block]).unwrap(), Value::Number(7));
    }

    #[test]
    fn parameter_does_not_leak_into_caller() {
        let mut t = Tree::new();
        let p_in_body = t.ident("p");
        let identity = t.function("p", p_in_body);
        let bind_f = t.bind(&[("f", identity)]);
        let f = t.ident("f");
        let one = t.num(1);
        let call = t.call(f, one);
        let p = t.ident("p");

        assert_eq!(t.run(&[bind_f, call, p]).unwrap_err().kind, unbound("p"));
    }

    #[test]
    fn recursion_through_assignment() {
        let mut t = Tree::new();
        let zero = t.num(0);
        let bind_fact = t.bind(&[("fact", zero)]);

        let n = t.ident("n");
        let one = t.num(1);
        let test = t.binary(BinaryOp::LtEq, n, one);
        let base = t.num(1);
        let n2 = t.ident("n");
        let n3 = t.ident("n");
        let one_again = t.num(1);
        let pred = t.binary(BinaryOp::Sub, n3, one_again);
        let fact = t.ident("fact");
        let recurse = t.call(fact, pred);
        let step = t.binary(BinaryOp::Mul, n2, recurse);
        let body = t.cond(test, base, step);
        let function = t.function("n", body);
        let assign = t.assign("fact", function);

        let fact_ref = t.ident("fact");
        let five = t.num(5);
        let call = t.call(fact_ref, five);

        assert_eq!(
            t.run(&[bind_fact, assign, call]).unwrap(),
            Value::Number(120)
        );
    }
}

mod short_circuit {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn or_skips_right_on_true() {
        let mut t = Tree::new();
        let yes = t.boolean(true);
        let bad = t.malformed("**");
        let or = t.logical(LogicalOp::Or, yes, bad);
        assert_eq!(t.run(&[or]).unwrap(), Value::Bool(true));
    }

    #[test]
    fn and_skips_right_on_false() {
        let mut t = Tree::new();
        let no = t.boolean(false);
        let y = t.ident("y");
        let and = t.logical(LogicalOp::And, no, y);
        assert_eq!(t.run(&[and]).unwrap(), Value::Bool(false));
    }

    #[test]
    fn right_runs_when_needed() {
        let mut t = Tree::new();
        let no = t.boolean(false);
        let bad = t.malformed("**");
        let or = t.logical(LogicalOp::Or, no, bad);
        assert_eq!(
            t.run(&[or]).unwrap_err().kind,
            EvalErrorKind::UnknownOperator {
                token: "**".to_string()
            }
        );
    }

    #[test]
    fn right_must_be_boolean() {
        let mut t = Tree::new();
        let yes = t.boolean(true);
        let one = t.num(1);
        let and = t.logical(LogicalOp::And, yes, one);
        assert_eq!(
            t.run(&[and]).unwrap_err().kind,
            EvalErrorKind::TypeMismatch {
                context: "`&&`".to_string(),
                expected: ValueKind::Boolean,
                got: ValueKind::Number,
            }
        );
    }

    #[test]
    fn left_must_be_boolean() {
        let mut t = Tree::new();
        let one = t.num(1);
        let yes = t.boolean(true);
        let or = t.logical(LogicalOp::Or, one, yes);
        assert_eq!(
            t.run(&[or]).unwrap_err().kind,
            EvalErrorKind::TypeMismatch {
                context: "`||`".to_string(),
                expected: ValueKind::Boolean,
                got: ValueKind::Number,
            }
        );
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assign_to_unbound_name() {
        let mut t = Tree::new();
        let one = t.num(1);
        let assign = t.assign("y", one);
        assert_eq!(t.run(&[assign]).unwrap_err().kind, unbound("y"));
    }

    #[test]
    fn assign_checks_target_before_value() {
        let mut t = Tree::new();
        let bad = t.malformed("**");
        let assign = t.assign("y", bad);
        assert_eq!(t.run(&[assign]).unwrap_err().kind, unbound("y"));
    }

    #[test]
    fn calling_a_number() {
        let mut t = Tree::new();
        let three = t.num(3);
        let one = t.num(1);
        let call = t.call(three, one);
        assert_eq!(
            t.run(&[call]).unwrap_err().kind,
            EvalErrorKind::NotCallable {
                got: ValueKind::Number
            }
        );
    }

    #[test]
    fn callee_checked_before_argument() {
        let mut t = Tree::new();
        let yes = t.boolean(true);
        let missing = t.ident("missing");
        let call = t.call(yes, missing);
        assert_eq!(
            t.run(&[call]).unwrap_err().kind,
            EvalErrorKind::NotCallable {
                got: ValueKind::Boolean
            }
        );
    }

    #[test]
    fn conditional_requires_boolean() {
        let mut t = Tree::new();
        let zero = t.num(0);
        let one = t.num(1);
        let two = t.num(2);
        let cond = t.cond(zero, one, two);
        assert_eq!(
            t.run(&[cond]).unwrap_err().kind,
            EvalErrorKind::TypeMismatch {
                context: "conditional".to_string(),
                expected: ValueKind::Boolean,
                got: ValueKind::Number,
            }
        );
    }

    #[test]
    fn unary_operand_error_reported() {
        let mut t = Tree::new();
        let one = t.num(1);
        let not = t.unary(UnaryOp::Not, one);
        assert!(matches!(
            t.run(&[not]).unwrap_err().kind,
            EvalErrorKind::TypeMismatch { .. }
        ));
    }

    #[test]
    fn error_points_at_innermost_node() {
        let mut t = Tree::new();
        let one = t.num(1);
        let zero = t.num(0);
        let div = t.binary(BinaryOp::Div, one, zero);
        let two = t.num(2);
        let sum = t.binary(BinaryOp::Add, div, two);
        let err = t.run(&[sum]).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        assert_eq!(err.expr, Some(div));
    }

    #[test]
    fn first_error_aborts_later_statements() {
        let mut t = Tree::new();
        let missing = t.ident("missing");
        let bad = t.malformed("**");
        assert_eq!(t.run(&[missing, bad]).unwrap_err().kind, unbound("missing"));
    }

    #[test]
    fn committed_writes_survive_a_failure() {
        let mut t = Tree::new();
        let one = t.num(1);
        let bind = t.bind(&[("x", one)]);
        let two = t.num(2);
        let assign = t.assign("x", two);
        let one_again = t.num(1);
        let zero = t.num(0);
        let div = t.binary(BinaryOp::Div, one_again, zero);

        let mut interpreter = Interpreter::new(&t.arena, &t.interner);
        let mut env = Environment::new();
        let err = interpreter
            .eval_statements(&[bind, assign, div], &mut env)
            .unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);

        let x = t.interner.intern("x");
        assert_eq!(env.lookup(x, interpreter.heap()), Some(&Value::Number(2)));
    }

    #[test]
    fn names_from_another_interner_render_raw() {
        let mut t = Tree::new();
        let missing = t.ident("zzz");
        let bad = t.malformed("**");

        let other = StringInterner::new();
        let mut interpreter = Interpreter::new(&t.arena, &other);
        let mut env = Environment::new();

        let err = interpreter
            .eval_statements(&[missing], &mut env)
            .unwrap_err();
        assert_eq!(err.kind, unbound("#1"));

        let err = interpreter.eval_statements(&[bad], &mut env).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UnknownOperator {
                token: "#2".to_string()
            }
        );
    }
}
