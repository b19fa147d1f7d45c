use super::*;
use pretty_assertions::assert_eq;

fn malformed(token_count: usize) -> EvalResult<Instruction<'static>> {
    Err(EvalError::MalformedInstruction { token_count })
}

#[test]
fn classify_assignment() {
    assert_eq!(
        Instruction::classify("A = 2"),
        Ok(Instruction::Assign {
            symbol: "A",
            value: "2"
        })
    );
}

#[test]
fn classify_addition() {
    assert_eq!(
        Instruction::classify("C = A + B"),
        Ok(Instruction::Add {
            symbol: "C",
            lhs: "A",
            rhs: "B"
        })
    );
}

#[test]
fn classify_return() {
    assert_eq!(
        Instruction::classify("Z"),
        Ok(Instruction::Return { symbol: "Z" })
    );
}

#[test]
fn extra_whitespace_is_ignored() {
    assert_eq!(
        Instruction::classify("  K   =  A +\tB  "),
        Ok(Instruction::Add {
            symbol: "K",
            lhs: "A",
            rhs: "B"
        })
    );
}

#[test]
fn three_tokens_without_equals_is_malformed() {
    assert_eq!(Instruction::classify("A + B"), malformed(3));
}

#[test]
fn chained_addition_is_malformed() {
    assert_eq!(Instruction::classify("A = 1 + 2 + 3"), malformed(7));
}

#[test]
fn five_tokens_with_wrong_operator_is_malformed() {
    assert_eq!(Instruction::classify("A = 1 - 2"), malformed(5));
    assert_eq!(Instruction::classify("A + 1 + 2"), malformed(5));
}

#[test]
fn empty_and_blank_lines_are_malformed() {
    assert_eq!(Instruction::classify(""), malformed(0));
    assert_eq!(Instruction::classify("   "), malformed(0));
}

#[test]
fn two_and_four_tokens_are_malformed() {
    assert_eq!(Instruction::classify("A ="), malformed(2));
    assert_eq!(Instruction::classify("A = 1 +"), malformed(4));
}

#[test]
fn keywords_must_be_separate_tokens() {
    assert_eq!(Instruction::classify("A=2"), Ok(Instruction::Return { symbol: "A=2" }));
}

#[test]
fn accessors_and_display() {
    let add = Instruction::classify("C   = A +  B").unwrap_or(Instruction::Return { symbol: "" });
    assert_eq!(add.name(), "add");
    assert_eq!(add.to_string(), "C = A + B");

    let ret = Instruction::Return { symbol: "C" };
    assert_eq!(ret.name(), "return");
    assert_eq!(ret.to_string(), "C");
}
