use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn calcify(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_calcify")).args(args)
                                                               .env_remove("CALCIFY_LOG")
                                                               .stdin(Stdio::piped())
                                                               .stdout(Stdio::piped())
                                                               .stderr(Stdio::piped())
                                                               .spawn()
                                                               .expect("failed to start calcify");

    let mut pipe = child.stdin.take().expect("stdin is piped");
    if let Some(input) = stdin {
        pipe.write_all(input.as_bytes()).expect("failed to write stdin");
    }
    drop(pipe);

    child.wait_with_output().expect("calcify did not finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn value_is_printed_with_exit_code_zero() {
    let output = calcify(&["100-25*3+50/2"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "50\n");
}

#[test]
fn invalid_expression_exits_with_one() {
    let output = calcify(&["2++3"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Invalid expression: Expression contains adjacent operators."));
}

#[test]
fn division_by_zero_exits_with_one() {
    let output = calcify(&["1/0"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to evaluate the expression : Invalid calculation due \
                                       to division by zero"));
}

#[test]
fn internal_fault_exits_with_two() {
    let output = calcify(&["2 3"], None);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Internal error"));
}

#[test]
fn stdin_drops_one_trailing_newline() {
    let output = calcify(&[], Some("4+5/2-1\n"));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5.5\n");
}

#[test]
fn stdin_keeps_further_trailing_newlines() {
    let output = calcify(&[], Some("4+5\n\n\n"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Expression is invalid."));
}

#[test]
fn file_input_drops_one_trailing_newline() {
    let output = calcify(&["--file", "tests/inputs/expression.txt"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5.5\n");
}

#[test]
fn missing_file_exits_with_two() {
    let output = calcify(&["--file", "tests/inputs/does-not-exist.txt"], None);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read the input file"));
}
