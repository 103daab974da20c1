//! Decorator: extra behavior attached to an object without changing its type.
//!
//! Two renditions: an extension trait that grants a [`Student`] exam-coaching
//! operations its own impl never declared, and stackable wrappers that layer
//! annotations over a transcript source.

// ============================================================================
// Example: Extension Trait - Coaching Grafted Onto Student
// ============================================================================

pub struct Student {
    name: String,
    grade: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pass_exam(&self) -> &'static str {
        "passed exam!"
    }
}

/// Grade access and exam preparation live here, not on [`Student`] itself.
pub trait ExamCoaching {
    fn prepare_exam(&self) -> String;
    fn grade(&self) -> f64;
    fn set_grade(&mut self, grade: f64);
}

impl ExamCoaching for Student {
    fn prepare_exam(&self) -> String {
        format!("{} prepares the exam!", self.name)
    }

    fn grade(&self) -> f64 {
        self.grade
    }

    fn set_grade(&mut self, grade: f64) {
        self.grade = grade;
    }
}

// ============================================================================
// Example: Stackable Wrappers - Annotated Transcripts
// ============================================================================

pub trait Transcript {
    fn render(&self) -> String;
}

pub struct PlainTranscript {
    student: String,
    grade: f64,
}

impl PlainTranscript {
    pub fn new(student: impl Into<String>, grade: f64) -> Self {
        Self {
            student: student.into(),
            grade,
        }
    }
}

impl Transcript for PlainTranscript {
    fn render(&self) -> String {
        format!("Transcript for {}: {}", self.student, self.grade)
    }
}

pub struct WithHonors {
    inner: Box<dyn Transcript>,
}

impl WithHonors {
    pub fn new(inner: Box<dyn Transcript>) -> Self {
        Self { inner }
    }
}

impl Transcript for WithHonors {
    fn render(&self) -> String {
        format!("{} [honors]", self.inner.render())
    }
}

pub struct WithSignature {
    inner: Box<dyn Transcript>,
    registrar: String,
}

impl WithSignature {
    pub fn new(inner: Box<dyn Transcript>, registrar: impl Into<String>) -> Self {
        Self {
            inner,
            registrar: registrar.into(),
        }
    }
}

impl Transcript for WithSignature {
    fn render(&self) -> String {
        format!("{} [signed: {}]", self.inner.render(), self.registrar)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coaching_reads_and_writes_grade() {
        let mut student = Student::new("Ayoub", 12.0);
        assert_eq!(student.grade(), 12.0);
        student.set_grade(18.12);
        assert_eq!(student.grade(), 18.12);
    }

    #[test]
    fn test_prepare_exam_names_the_student() {
        let student = Student::new("Ayoub", 12.0);
        assert_eq!(student.prepare_exam(), "Ayoub prepares the exam!");
        assert_eq!(student.pass_exam(), "passed exam!");
    }

    #[test]
    fn test_plain_transcript() {
        let transcript = PlainTranscript::new("Ayoub", 18.12);
        assert_eq!(transcript.render(), "Transcript for Ayoub: 18.12");
    }

    #[test]
    fn test_wrappers_stack_in_order() {
        let transcript: Box<dyn Transcript> = Box::new(PlainTranscript::new("Ayoub", 18.12));
        let transcript = WithHonors::new(transcript);
        let transcript = WithSignature::new(Box::new(transcript), "registrar");
        assert_eq!(
            transcript.render(),
            "Transcript for Ayoub: 18.12 [honors] [signed: registrar]"
        );
    }
}
