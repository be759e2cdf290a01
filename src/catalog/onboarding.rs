//! Onboarding copy and step layouts per method.

use crate::navigation::OnboardingMethod;

/// A single required input on an onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// One step (text) or question (audio/video) of an onboarding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Selection-screen and completion-screen copy for a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub completion_title: &'static str,
    pub completion_description: &'static str,
    pub icon: &'static str,
}

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "first_name", label: "First Name", placeholder: "Enter your first name" },
    FieldSpec { key: "last_name", label: "Last Name", placeholder: "Enter your last name" },
    FieldSpec { key: "email", label: "Email Address", placeholder: "Enter your email" },
    FieldSpec { key: "phone", label: "Phone Number", placeholder: "Enter your phone number" },
];

const EDUCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "date_of_birth", label: "Date of Birth", placeholder: "YYYY-MM-DD" },
    FieldSpec {
        key: "education",
        label: "Highest Education Level",
        placeholder: "High School, Bachelor's Degree, Master's Degree, PhD, Other",
    },
];

const PREFERENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "interests", label: "Areas of Interest", placeholder: "Tell us about your learning interests..." },
    FieldSpec { key: "goals", label: "Learning Goals", placeholder: "What do you hope to achieve?" },
    FieldSpec { key: "experience", label: "Previous Experience", placeholder: "Any relevant experience or background?" },
];

const RESPONSE_FIELD: &[FieldSpec] = &[FieldSpec {
    key: "response",
    label: "Your Response",
    placeholder: "Type what you would say...",
}];

pub const TEXT_STEPS: [StepSpec; 3] = [
    StepSpec {
        title: "Personal Information",
        subtitle: "Tell us about yourself",
        fields: PERSONAL_FIELDS,
    },
    StepSpec {
        title: "Educational Background",
        subtitle: "Help us understand your academic journey",
        fields: EDUCATION_FIELDS,
    },
    StepSpec {
        title: "Learning Preferences",
        subtitle: "Let us know what drives your learning",
        fields: PREFERENCE_FIELDS,
    },
];

pub const AUDIO_QUESTIONS: [&str; 5] = [
    "Hello! I'm your AI assistant. Please tell me your name and a bit about yourself.",
    "What's your educational background and what subjects interest you the most?",
    "What are your main learning goals? What do you hope to achieve with our platform?",
    "Do you have any previous experience with online learning? What works best for you?",
    "Finally, is there anything specific you'd like our AI to know to personalize your experience?",
];

pub const VIDEO_QUESTIONS: [&str; 5] = [
    "Hello! I'm your AI interviewer. Could you please introduce yourself and tell me your name?",
    "What's your educational background? What field of study interests you most?",
    "What motivated you to join our learning platform? What are your goals?",
    "How do you prefer to learn? Do you like visual, hands-on, or theoretical approaches?",
    "Finally, what would you like to achieve in the next 6 months with our platform?",
];

/// Interviewer reactions shown once a video question is answered.
pub const VIDEO_AI_RESPONSES: [&str; 5] = [
    "Nice to meet you! That's a great introduction.",
    "Interesting background! That will definitely help with your learning journey.",
    "Those are excellent goals. We can definitely help you achieve them.",
    "Understanding your learning style will help us personalize your experience.",
    "Perfect! Let's create a learning path tailored to your objectives.",
];

/// Step layout for a method, in order.
pub fn steps_for(method: OnboardingMethod) -> Vec<StepSpec> {
    let questions: &[&'static str] = match method {
        OnboardingMethod::Text => return TEXT_STEPS.to_vec(),
        OnboardingMethod::Audio => &AUDIO_QUESTIONS,
        OnboardingMethod::Video => &VIDEO_QUESTIONS,
    };
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| StepSpec {
            title: question,
            subtitle: QUESTION_SUBTITLES[i.min(QUESTION_SUBTITLES.len() - 1)],
            fields: RESPONSE_FIELD,
        })
        .collect()
}

const QUESTION_SUBTITLES: [&str; 5] = [
    "Question 1 of 5",
    "Question 2 of 5",
    "Question 3 of 5",
    "Question 4 of 5",
    "Question 5 of 5",
];

pub fn method_info(method: OnboardingMethod) -> MethodInfo {
    match method {
        OnboardingMethod::Text => MethodInfo {
            title: "Text-based Onboarding",
            description: "Fill a form with text to create your student account",
            completion_title: "Text-Based Onboarding",
            completion_description: "Successfully completed form submission",
            icon: "📝",
        },
        OnboardingMethod::Audio => MethodInfo {
            title: "Audio-based Onboarding",
            description: "Talk with our AI agent and give us an intro to generate your account",
            completion_title: "Audio-Based Onboarding",
            completion_description: "Successfully completed voice interview",
            icon: "🎙",
        },
        OnboardingMethod::Video => MethodInfo {
            title: "Video-based Onboarding",
            description: "Experience our AI Interviewer for your account generation based on your interview",
            completion_title: "Video-Based Onboarding",
            completion_description: "Successfully completed video interview",
            icon: "🎥",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts_per_method() {
        assert_eq!(steps_for(OnboardingMethod::Text).len(), 3);
        assert_eq!(steps_for(OnboardingMethod::Audio).len(), 5);
        assert_eq!(steps_for(OnboardingMethod::Video).len(), 5);
    }

    #[test]
    fn test_interview_steps_have_single_response_field() {
        for step in steps_for(OnboardingMethod::Video) {
            assert_eq!(step.fields.len(), 1);
        }
        assert_eq!(steps_for(OnboardingMethod::Text)[0].fields.len(), 4);
    }
}
