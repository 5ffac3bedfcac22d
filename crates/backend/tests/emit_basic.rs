use backend::lower_program;
use syntax::{Expr, Item, Pos, Program, Stmt};

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

fn read(name: &str) -> Item {
    Item::Stmt(Stmt::Read {
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

fn write(value: Expr) -> Item {
    Item::Stmt(Stmt::WriteExpr { value, pos: p() })
}

fn write_str(text: &str) -> Item {
    Item::Stmt(Stmt::WriteStr {
        text: text.into(),
        pos: p(),
    })
}

fn program(items: Vec<Item>) -> Program {
    Program { items }
}

#[test]
fn empty_program_is_a_bare_entry_function() {
    let ir = lower_program(&Program::default()).unwrap();
    assert_eq!(ir, "define i32 @main() {\n    ret i32 0\n}\n");
}

#[test]
fn read_two_sum_write() {
    let prog = program(vec![
        decl("i64", "x"),
        decl("i64", "y"),
        read("x"),
        read("y"),
        write(Expr::Binary {
            op: syntax::BinOp::Add,
            lhs: Box::new(ident("x")),
            rhs: Box::new(ident("y")),
            pos: p(),
        }),
    ]);
    let ir = lower_program(&prog).unwrap();
    let expected = "\
@.str.1 = private unnamed_addr constant [4 x i8] c\"%ld\\00\", align 1

define i32 @main() {
    %1 = alloca i64, align 8
    %2 = alloca i64, align 8
    %3 = call i32 (ptr, ...) @scanf(ptr noundef @.str.1, ptr noundef %1)
    %4 = call i32 (ptr, ...) @scanf(ptr noundef @.str.1, ptr noundef %2)
    %5 = load i64, ptr %1, align 8
    %6 = load i64, ptr %2, align 8
    %7 = add nsw i64 %5, %6
    %8 = call i32 (ptr, ...) @printf(ptr noundef @.str.1, i64 noundef %7)
    ret i32 0
}

declare i32 @scanf(ptr noundef, ...)
declare i32 @printf(ptr noundef, ...)
";
    assert_eq!(ir, expected);
}

#[test]
fn string_literals_are_pooled_and_deduplicated() {
    let prog = program(vec![
        write_str("hello"),
        write_str("world"),
        write_str("hello"),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert_eq!(
        ir.matches("@.str.1 = private unnamed_addr constant [6 x i8] c\"hello\\00\", align 1")
            .count(),
        1
    );
    assert_eq!(
        ir.matches("@.str.2 = private unnamed_addr constant [6 x i8] c\"world\\00\", align 1")
            .count(),
        1
    );
    assert!(!ir.contains("@.str.3"));
    // both writes of "hello" reference the same constant
    assert_eq!(ir.matches("@printf(ptr noundef @.str.1)").count(), 2);
}

#[test]
fn string_escapes_use_two_digit_hex() {
    let prog = program(vec![write_str("a\"b\\c\n")]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains(
        "@.str.1 = private unnamed_addr constant [7 x i8] c\"a\\22b\\5Cc\\0A\\00\", align 1"
    ));
}

#[test]
fn declaration_lines_appear_once_in_first_use_order() {
    // write first, then read: printf must precede scanf
    let prog = program(vec![decl("i32", "x"), write_str("go"), read("x")]);
    let ir = lower_program(&prog).unwrap();
    let printf_at = ir.find("declare i32 @printf").unwrap();
    let scanf_at = ir.find("declare i32 @scanf").unwrap();
    assert!(printf_at < scanf_at);
    assert_eq!(ir.matches("declare i32 @printf").count(), 1);
    assert_eq!(ir.matches("declare i32 @scanf").count(), 1);
}

#[test]
fn read_formats_follow_the_variable_type() {
    let prog = program(vec![
        decl("i32", "a"),
        decl("f64", "b"),
        decl("bool", "c"),
        read("a"),
        read("b"),
        read("c"),
    ]);
    let ir = lower_program(&prog).unwrap();
    // "%d" interned once, shared by the i32 and bool reads
    assert!(ir.contains("@.str.1 = private unnamed_addr constant [3 x i8] c\"%d\\00\", align 1"));
    assert!(ir.contains("@.str.2 = private unnamed_addr constant [4 x i8] c\"%lf\\00\", align 1"));
    assert!(ir.contains("@scanf(ptr noundef @.str.1, ptr noundef %1)"));
    assert!(ir.contains("@scanf(ptr noundef @.str.2, ptr noundef %2)"));
    assert!(ir.contains("@scanf(ptr noundef @.str.1, ptr noundef %3)"));
}

#[test]
fn write_of_f32_widens_to_double_but_keeps_the_f32_format() {
    let prog = program(vec![decl("f32", "g"), write(ident("g"))]);
    let ir = lower_program(&prog).unwrap();
    let expected = "\
@.str.1 = private unnamed_addr constant [3 x i8] c\"%f\\00\", align 1

define i32 @main() {
    %1 = alloca float, align 4
    %2 = load float, ptr %1, align 4
    %3 = fpext float %2 to double
    %4 = call i32 (ptr, ...) @printf(ptr noundef @.str.1, double noundef %3)
    ret i32 0
}

declare i32 @printf(ptr noundef, ...)
";
    assert_eq!(ir, expected);
}

#[test]
fn assignment_stores_through_the_declared_slot() {
    let prog = program(vec![
        decl("i32", "x"),
        Item::Stmt(Stmt::Assign {
            name: "x".into(),
            value: Expr::Int {
                text: "7".into(),
                pos: p(),
            },
            pos: p(),
        }),
        write(ident("x")),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %1 = alloca i32, align 4\n"));
    assert!(ir.contains("    store i32 7, ptr %1, align 4\n"));
    assert!(ir.contains("    %2 = load i32, ptr %1, align 4\n"));
}

#[test]
fn assignment_widens_an_i32_value_into_an_i64_slot() {
    let prog = program(vec![
        decl("i64", "x"),
        decl("i32", "y"),
        Item::Stmt(Stmt::Assign {
            name: "x".into(),
            value: ident("y"),
            pos: p(),
        }),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %3 = load i32, ptr %2, align 4\n"));
    assert!(ir.contains("    %4 = sext i32 %3 to i64\n"));
    assert!(ir.contains("    store i64 %4, ptr %1, align 8\n"));
}

#[test]
fn assignment_narrows_an_f64_value_into_an_f32_slot() {
    let prog = program(vec![
        decl("f32", "x"),
        Item::Stmt(Stmt::Assign {
            name: "x".into(),
            value: Expr::Float {
                text: "2.5".into(),
                pos: p(),
            },
            pos: p(),
        }),
    ]);
    let ir = lower_program(&prog).unwrap();
    assert!(ir.contains("    %2 = fptrunc double 2.5 to float\n"));
    assert!(ir.contains("    store float %2, ptr %1, align 4\n"));
}
