//! Instruction template for image descriptions

use crate::models::Length;

/// Styles the template documents for the model.
///
/// The request's style is not checked against this list.
pub const DOCUMENTED_STYLES: [(&str, &str); 7] = [
    ("Default", "neutral, ordinary description"),
    ("Art", "artistic and figurative, with emotion"),
    ("Realistic", "dry and factual, like a technical description"),
    ("Soft", "gentle and friendly, slightly promotional"),
    (
        "Scientific",
        "as in a scientific or technical paper, with precise terms",
    ),
    (
        "Informative",
        "as informative as possible: what is shown, what it is made of, where it is used, which details matter",
    ),
    (
        "Funny",
        "as cheerful and absurd as possible, with hyperbole, jokes and meme phrases, still grounded in what is really in the picture, no profanity",
    ),
];

/// Parameters that shape the instruction
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    pub style: &'a str,
    pub length: Length,
    pub tags_count: i32,
    pub language: &'a str,
}

impl PromptRequest<'_> {
    /// Render the full instruction text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(2048);

        out.push_str("You are the assistant of the PhotoGen application.\n");
        out.push_str("The user has uploaded an image.\n\n");
        out.push_str(
            "Your task is to return STRICTLY CLEAN JSON with no extra text, in this format:\n",
        );
        out.push_str("{\n");
        out.push_str("  \"description\": \"short description of the image\",\n");
        out.push_str("  \"tags\": [\"tag1\", \"tag2\", \"...\"]\n}\n\n");

        out.push_str(&format!("Language:\n- Write in {}.\n\n", self.language));

        out.push_str("Description styles:\n");
        for (name, meaning) in DOCUMENTED_STYLES {
            out.push_str(&format!("- {:<12} - {}.\n", name, meaning));
        }

        out.push_str("\nDescription length:\n");
        for length in Length::all() {
            out.push_str(&format!(
                "- {:<8} - {} sentences.\n",
                length.as_str(),
                length.sentences()
            ));
        }

        out.push_str("\nExtra guidance for the Funny style:\n");
        out.push_str("- use exaggeration, unexpected comparisons");
        out.push_str(" and light absurdity;\n");
        out.push_str("- popular meme expressions are fine, without profanity;\n");
        out.push_str("- the description must still be about");
        out.push_str(" the content of the picture.\n\n");

        out.push_str(&self.length_hint());
        out.push_str("\n\n");

        out.push_str("IMPORTANT:\n");
        out.push_str("- Do not use phrases like \"the image shows\",");
        out.push_str(" \"in the photo we can see\",\n");
        out.push_str("  \"the picture presents\", \"depicted\" and so on.\n");
        out.push_str("  Start directly with the scene or the object.\n");
        out.push_str("- The description must be coherent and logical,");
        out.push_str(" without filler.\n\n");

        out.push_str("Tags:\n");
        out.push_str(&self.tags_hint());
        out.push('\n');

        out.push_str("\nCurrent request parameters:\n");
        out.push_str(&format!("- Style: {}\n", self.style));
        out.push_str(&format!("- Length: {}\n", self.length));
        out.push_str(&format!("- Tag count: {}\n", self.tags_count.max(0)));

        out
    }

    fn length_hint(&self) -> String {
        format!(
            "For the current length parameter ('{}') write about {} sentences.",
            self.length,
            self.length.sentences()
        )
    }

    fn tags_hint(&self) -> String {
        if self.tags_count <= 0 {
            return "- Return an empty list: \"tags\": [].".to_string();
        }

        format!(
            "- There must be EXACTLY {} tags.\n\
             - Tags are single words or short phrases.\n\
             - No hash signs (#) and no commas inside tags.\n\
             - Tags must match the objects and the meaning of the scene.",
            self.tags_count
        )
    }
}
