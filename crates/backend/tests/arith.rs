use backend::lower_program;
use syntax::{BinOp, Expr, Item, LogicOp, Pos, Program, Stmt};

fn p() -> Pos {
    Pos::default()
}

fn decl(ty: &str, name: &str) -> Item {
    Item::Stmt(Stmt::Decl {
        ty: ty.into(),
        name: name.into(),
        pos: p(),
    })
}

fn ident(name: &str) -> Expr {
    Expr::Ident {
        name: name.into(),
        pos: p(),
    }
}

fn int(text: &str) -> Expr {
    Expr::Int {
        text: text.into(),
        pos: p(),
    }
}

fn bin(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        pos: p(),
    }
}

fn logic(op: LogicOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Logic {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        pos: p(),
    }
}

fn write(value: Expr) -> Item {
    Item::Stmt(Stmt::WriteExpr { value, pos: p() })
}

fn program(items: Vec<Item>) -> Program {
    Program { items }
}

#[test]
fn nested_expression_lowers_post_order() {
    // (a + b) * (a - b)
    let prog = program(vec![
        decl("i64", "a"),
        decl("i64", "b"),
        write(bin(
            BinOp::Mul,
            bin(BinOp::Add, ident("a"), ident("b")),
            bin(BinOp::Sub, ident("a"), ident("b")),
        )),
    ]);
    let ir = lower_program(&prog).unwrap();
    let expected = "\
@.str.1 = private unnamed_addr constant [4 x i8] c\"%ld\\00\", align 1

define i32 @main() {
    %1 = alloca i64, align 8
    %2 = alloca i64, align 8
    %3 = load i64, ptr %1, align 8
    %4 = load i64, ptr %2, align 8
    %5 = add nsw i64 %3, %4
    %6 = load i64, ptr %1, align 8
    %7 = load i64, ptr %2, align 8
    %8 = sub nsw i64 %6, %7
    %9 = mul nsw i64 %5, %8
    %10 = call i32 (ptr, ...) @printf(ptr noundef @.str.1, i64 noundef %9)
    ret i32 0
}

declare i32 @printf(ptr noundef, ...)
";
    assert_eq!(ir, expected);
}

#[test]
fn left_associative_chain_reloads_each_use() {
    // (x + y) * x * (y - x)
    let prog = program(vec![
        decl("i64", "x"),
        decl("i64", "y"),
        write(bin(
            BinOp::Mul,
            bin(BinOp::Mul, bin(BinOp::Add, ident("x"), ident("y")), ident("x")),
            bin(BinOp::Sub, ident("y"), ident("x")),
        )),
    ]);
    let ir = lower_program(&prog).unwrap();
    let expected = "\
@.str.1 = private unnamed_addr constant [4 x i8] c\"%ld\\00\", align 1

define i32 @main() {
    %1 = alloca i64, align 8
    %2 = alloca i64, align 8
    %3 = load i64, ptr %1, align 8
    %4 = load i64, ptr %2, align 8
    %5 = add nsw i64 %3, %4
    %6 = load i64, ptr %1, align 8
    %7 = mul nsw i64 %5, %6
    %8 = load i64, ptr %2, align 8
    %9 = load i64, ptr %1, align 8
    %10 = sub nsw i64 %8, %9
    %11 = mul nsw i64 %7, %10
    %12 = call i32 (ptr, ...) @printf(ptr noundef @.str.1, i64 noundef %11)
    ret i32 0
}

declare i32 @printf(ptr noundef, ...)
";
    assert_eq!(ir, expected);
    assert_eq!(ir.matches("declare i32 @printf").count(), 1);
}

#[test]
fn narrower_int_operand_sign_extends() {
    let prog = program(vec![
        decl("i32", "x"),
        decl("i64", "y"),
        write(bin(BinOp::Add, ident("x"), ident("y"))),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %5 = sext i32 %3 to i64\n"));
    assert!(ir.contains("    %6 = add nsw i64 %5, %4\n"));
    // result is i64, so the long format is used
    assert!(ir.contains("c\"%ld\\00\""));
}

#[test]
fn narrower_float_operand_extends() {
    let prog = program(vec![
        decl("f64", "x"),
        decl("f32", "y"),
        write(bin(BinOp::Mul, ident("x"), ident("y"))),
    ]);
    let ir = lower_program(&prog).unwrap();
    // the right operand widens, the left is untouched
    assert!(ir.contains("    %5 = fpext float %4 to double\n"));
    assert!(ir.contains("    %6 = fmul double %3, %5\n"));
}

#[test]
fn int_operand_converts_to_the_float_side() {
    let prog = program(vec![
        decl("i32", "x"),
        decl("f64", "y"),
        write(bin(BinOp::Add, ident("x"), ident("y"))),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %5 = sitofp i32 %3 to double\n"));
    assert!(ir.contains("    %6 = fadd double %5, %4\n"));
    assert!(ir.contains("c\"%lf\\00\""));
}

#[test]
fn division_has_no_wrap_flag() {
    let prog = program(vec![
        decl("i32", "x"),
        write(bin(BinOp::Div, ident("x"), int("2"))),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %3 = sdiv i32 %2, 2\n"));
    assert!(!ir.contains("sdiv nsw"));
}

#[test]
fn float_arithmetic_uses_float_mnemonics() {
    let prog = program(vec![
        decl("f64", "x"),
        write(bin(
            BinOp::Sub,
            bin(BinOp::Div, ident("x"), ident("x")),
            ident("x"),
        )),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %4 = fdiv double %2, %3\n"));
    assert!(ir.contains("    %6 = fsub double %4, %5\n"));
}

#[test]
fn integer_literals_stay_immediate() {
    let prog = program(vec![write(bin(BinOp::Add, int("1"), int("2")))]);
    let ir = lower_program(&prog).unwrap();
    // no loads, the add consumes both immediates
    assert!(ir.contains("    %1 = add nsw i32 1, 2\n"));
    assert!(ir.contains("i32 noundef %1"));
}

#[test]
fn boolean_connectives_lower_to_i1_bitwise_ops() {
    let t = Expr::Bool {
        value: true,
        pos: p(),
    };
    let f = Expr::Bool {
        value: false,
        pos: p(),
    };
    let prog = program(vec![write(logic(
        LogicOp::And,
        logic(LogicOp::Or, t.clone(), f.clone()),
        logic(LogicOp::Xor, t, f),
    ))]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %1 = or i1 true, false\n"));
    assert!(ir.contains("    %2 = xor i1 true, false\n"));
    assert!(ir.contains("    %3 = and i1 %1, %2\n"));
    // booleans print through the integer format
    assert!(ir.contains("c\"%d\\00\""));
    assert!(ir.contains("i1 noundef %3"));
}

#[test]
fn not_is_an_xor_with_true() {
    let prog = program(vec![
        decl("bool", "b"),
        write(Expr::Not {
            expr: Box::new(ident("b")),
            pos: p(),
        }),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %2 = load i1, ptr %1, align 1\n"));
    assert!(ir.contains("    %3 = xor i1 %2, true\n"));
}
