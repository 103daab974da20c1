//! Pattern 2: Structural Patterns
//! Example: Decorator - Capability Traits and Stackable Wrappers
//!
//! Run with: cargo run --bin p2_decorator

use design_patterns::decorator::{
    ExamCoaching, PlainTranscript, Student, Transcript, WithHonors, WithSignature,
};

fn exam_coaching_example() {
    let mut student = Student::new("Ayoub", 15.5);
    println!("{}", student.prepare_exam());
    println!("{} {}", student.name(), student.pass_exam());

    student.set_grade(18.12);
    println!("final grade: {}", student.grade());
}

fn transcript_example() {
    let plain = PlainTranscript::new("Ayoub", 18.12);
    println!("{}", plain.render());

    // Each wrapper adds one annotation around whatever it holds.
    let honors = WithHonors::new(Box::new(PlainTranscript::new("Ayoub", 18.12)));
    println!("{}", honors.render());

    let signed = WithSignature::new(
        Box::new(WithHonors::new(Box::new(PlainTranscript::new(
            "Ayoub", 18.12,
        )))),
        "registrar",
    );
    println!("{}", signed.render());
}

fn main() {
    println!("Decorator Pattern");
    println!("=================\n");

    println!("=== Capability Coaching ===");
    exam_coaching_example();
    println!();

    println!("=== Stacked Transcript Wrappers ===");
    transcript_example();
}
