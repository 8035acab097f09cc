//! Basic usage example for nebula-rule

use nebula_rule::prelude::*;

fn main() {
    // Leaf rules: one predicate, everything else inherited.
    let email = email_rule();
    for value in [json!("user@example.com"), json!("not-an-email"), json!(42)] {
        match email.validate(&value) {
            RuleOutcome::Pass => println!("✓ {value} is a valid email"),
            outcome => println!("✗ {value}: {}", outcome.messages().join("; ")),
        }
    }

    // Absent optional fields bypass validation entirely.
    assert!(email.validate(&not_provided()).is_pass());
    println!("✓ absent values pass by default");

    // ...unless a rule opts in to seeing them.
    match required().validate(&not_provided()) {
        RuleOutcome::Pass => unreachable!(),
        outcome => println!("✗ required field: {}", outcome.messages().join("; ")),
    }

    // Parameterized rule with named access to positional parameters.
    let username = length_between(3, 12);
    println!(
        "username rule: min = {}, max = {}",
        username.get("min").unwrap(),
        username.get("max").unwrap()
    );

    // One-shot validation that also surfaces the rule instance.
    let (outcome, rule) = LengthBetweenRule::quick(&json!("al"), params![3, 12]);
    println!(
        "✗ 'al' against min = {}: {}",
        rule.get("min").unwrap(),
        outcome.messages().join("; ")
    );

    println!("\nnebula-rule is working correctly!");
}
