use std::cell::{Cell, RefCell};

use calcify::{
    Calculator, CalculatorError, EvaluationError, Response, ValidationError, ValidationOutcome,
    calculator::service::{Evaluate, ExpressionEvaluator, ExpressionValidator, Validate},
};

/// Validator that returns a canned result and records what it saw.
struct FakeValidator {
    result: Result<ValidationOutcome, CalculatorError>,
    seen:   RefCell<Vec<String>>,
}

impl FakeValidator {
    fn returning(result: Result<ValidationOutcome, CalculatorError>) -> Self {
        Self { result,
               seen: RefCell::new(Vec::new()) }
    }

    fn accepting() -> Self {
        Self::returning(Ok(ValidationOutcome::default()))
    }
}

impl Validate for &FakeValidator {
    fn validate(&self, expression: &str) -> Result<ValidationOutcome, CalculatorError> {
        self.seen.borrow_mut().push(expression.to_string());
        self.result.clone()
    }
}

/// Evaluator that returns a canned result and counts its calls.
struct FakeEvaluator {
    result: Result<f64, CalculatorError>,
    calls:  Cell<usize>,
}

impl FakeEvaluator {
    fn returning(result: Result<f64, CalculatorError>) -> Self {
        Self { result,
               calls: Cell::new(0) }
    }
}

impl Evaluate for &FakeEvaluator {
    fn evaluate(&self, _expression: &str) -> Result<f64, CalculatorError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[test]
fn valid_expression_returns_value() {
    let validator = FakeValidator::accepting();
    let evaluator = FakeEvaluator::returning(Ok(42.0));

    let response = Calculator::with(&validator, &evaluator).handle("anything");

    assert_eq!(response, Response::Ok(42.0));
    assert_eq!(validator.seen.borrow().as_slice(), ["anything"]);
    assert_eq!(evaluator.calls.get(), 1);
}

#[test]
fn failed_validation_is_bad_request_and_skips_evaluation() {
    let outcome = ValidationOutcome::from_failures([ValidationError::AdjacentOperators]);
    let validator = FakeValidator::returning(Ok(outcome));
    let evaluator = FakeEvaluator::returning(Ok(1.0));

    let response = Calculator::with(&validator, &evaluator).handle("2++3");

    assert_eq!(response,
               Response::BadRequest("Invalid expression: Expression contains adjacent operators."
                                    .to_string()));
    assert_eq!(evaluator.calls.get(), 0);
}

#[test]
fn every_failed_rule_is_listed_in_the_message() {
    let outcome = ValidationOutcome::from_failures([ValidationError::InvalidCharacters,
                                                    ValidationError::InvalidBoundary]);
    let validator = FakeValidator::returning(Ok(outcome));
    let evaluator = FakeEvaluator::returning(Ok(1.0));

    let response = Calculator::with(&validator, &evaluator).handle("x");

    assert_eq!(response,
               Response::BadRequest("Invalid expression: Expression is invalid.\nExpression \
                                     contains invalid characters."
                                                                  .to_string()));
}

#[test]
fn validator_fault_is_internal_error() {
    let validator = FakeValidator::returning(Err(CalculatorError::Fault("boom".to_string())));
    let evaluator = FakeEvaluator::returning(Ok(1.0));

    let response = Calculator::with(&validator, &evaluator).handle("1+1");

    assert_eq!(response, Response::InternalError);
    assert_eq!(evaluator.calls.get(), 0);
}

#[test]
fn division_by_zero_is_bad_request() {
    let validator = FakeValidator::accepting();
    let evaluator = FakeEvaluator::returning(Err(EvaluationError::DivisionByZero.into()));

    let response = Calculator::with(&validator, &evaluator).handle("1/0");

    assert_eq!(response,
               Response::BadRequest("Failed to evaluate the expression : Invalid calculation \
                                     due to division by zero"
                                                             .to_string()));
}

#[test]
fn malformed_number_is_internal_error() {
    let validator = FakeValidator::accepting();
    let error = EvaluationError::MalformedNumber { literal: "2 3".to_string() };
    let evaluator = FakeEvaluator::returning(Err(error.into()));

    let response = Calculator::with(&validator, &evaluator).handle("2 3");

    assert_eq!(response, Response::InternalError);
}

#[test]
fn evaluator_fault_is_internal_error() {
    let validator = FakeValidator::accepting();
    let evaluator = FakeEvaluator::returning(Err(CalculatorError::Fault("boom".to_string())));

    let response = Calculator::with(&validator, &evaluator).handle("1+1");

    assert_eq!(response, Response::InternalError);
}

#[test]
fn default_collaborators_work_end_to_end() {
    let calculator = Calculator::with(ExpressionValidator, ExpressionEvaluator);

    assert_eq!(calculator.handle("2+3*2"), Response::Ok(8.0));
    assert_eq!(calculator.handle(""),
               Response::BadRequest("Invalid expression: Expression is empty.\nExpression is \
                                     invalid.\nExpression contains invalid characters."
                                                                                       .to_string()));
}

#[test]
fn responses_render_for_the_client() {
    assert_eq!(Response::Ok(5.5).to_string(), "5.5");
    assert_eq!(Response::Ok(8.0).to_string(), "8");
    assert_eq!(Response::Ok(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Response::InternalError.to_string(), "Internal error");
}

#[test]
fn calculator_can_be_shared_between_threads() {
    let calculator = Calculator::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=4).map(|n| {
                                          let calculator = &calculator;
                                          s.spawn(move || calculator.handle(&format!("{n}*{n}0")))
                                      })
                                      .collect();
        for (n, handle) in (1..=4).zip(handles) {
            let expected = f64::from(n * n * 10);
            assert_eq!(handle.join().unwrap(), Response::Ok(expected));
        }
    });
}
