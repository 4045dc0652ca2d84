//! Instruction blocks assembled into the quiz-generation prompt.
//!
//! The blocks are kept as plain constants so the full prompt text is
//! reviewable in one place; `services::prompt_builder` stitches them together
//! with the per-request fields.

pub const CATEGORY_REQUIREMENTS: &str = r#"For each question, follow these category-specific requirements:
- "General": Open-ended questions about common practices
- "Programming": Include code snippets/implementation questions
- "Scenario-Based": Situational questions with multiple-choice options
- "Conceptual": Theory/principle explanation questions
- "Mermaid Diagram": Questions requiring flow/architecture diagrams
- "Interview": Interview questions"#;

pub const GENERAL_BRIEF: &str = r#"Create quiz questions about the provided content with structured reasoning:
- Analyze the full provided content thoroughly: main topics, concepts, and key points.
- Identify distinct areas that would make good quiz questions and note why each matters.
- Craft a clear, concise question per area with a single, unambiguous correct answer.
- Develop comprehensive answers that explain the concept fully, with relevant context,
  definitions, and examples where appropriate. Avoid trick questions."#;

pub const PROGRAMMING_BRIEF: &str = r#"Convert the content into programming-style questions/snippets that abstractly model
its core ideas as code logic, regardless of domain:
- Identify key processes, formulas, relationships, and cause-effect chains.
- Translate workflows into functions, conditional logic, loops, and data structures,
  using domain-specific terms in variable and function names.
- Create questions with code snippets using [bracketed placeholders] for domain terms,
  asking to complete, debug, or explain the code.
- In answers, replace placeholders with actual terms from the content and explicitly
  connect the code logic back to the domain."#;

pub const SCENARIO_BRIEF: &str = r#"Create scenario-based quiz questions that test application of knowledge:
- Extract real-world scenarios mentioned or implied by the content.
- Design realistic, specific scenarios that require applying its principles.
- Ask how to analyze, solve, or respond to each situation; keep questions practical
  rather than purely theoretical.
- Provide 4 plausible options per question, with the answer text identical to exactly
  one option."#;

pub const CONCEPTUAL_BRIEF: &str = r#"Create conceptual quiz questions that test deep understanding of the content's
theoretical foundations:
- Identify the fundamental concepts, theories, and mental models presented, and the
  relationships between them.
- Ask for comparisons, definitions, and theoretical implications; test comprehension
  beyond recall of surface facts.
- Answers should thoroughly explain each concept and address common misconceptions."#;

pub const MERMAID_BRIEF: &str = r#"Create questions requiring flow/architecture diagrams:
- Model the content with appropriate diagram types (flowchart, sequence, state,
  class, timeline, and so on), applying each type to the content even if abstractly.
- Ask to interpret, complete, or correct each diagram.
- Include the complete corrected diagram in the answer."#;

pub const INTERVIEW_BRIEF: &str = r#"Create interview questions based on the provided content that assess candidates
effectively:
- Cover technical knowledge, behavioral, situational, and problem-solving angles.
- Keep questions open-ended enough for candidates to demonstrate depth.
- Model answers should state what interviewers listen for and what distinguishes
  exceptional answers from adequate ones."#;

pub const FORMAT_CONTRACT: &str = r#"Format response as valid JSON array containing objects with:
{
  "type": "category tag, the lowercased category name with spaces replaced by dashes",
  "question": "Category-appropriate question text",
  "options": ["..."],
  "answer": "Detailed solution",
  "diagram": "mermaid syntax"
}
"options" is required for Scenario-Based questions and optional otherwise.
"diagram" is only for the Mermaid Diagram category; use null elsewhere."#;

pub const CODING_RULES: &str = r#"Coding Examples Rules:
1. For code examples use "~~~language" syntax to indicate code blocks, like
   "~~~javascript" or "~~~python".
2. Always specify the language after the ~~~ for proper syntax highlighting.
3. Put the fenced code inside the "answer" string with surrounding explanation text."#;

pub const SCENARIO_FORMAT_RULES: &str = r#"For Scenario-Based questions use EXACTLY this format:
{
  "type": "scenario-based",
  "question": "Which method is best for...",
  "options": ["Option 1 text", "Option 2 text", "Option 3 text", "Option 4 text"],
  "answer": "Exact matching option text",
  "diagram": null
}

Key requirements:
- Answer must be identical to one option text
- No markdown in options/answers
- No explanations in answers for MCQs"#;

pub const MERMAID_RULES: &str = r#"For Mermaid Diagrams STRICTLY REQUIRE:
- Use ONLY official Mermaid syntax
- Wrap ALL node labels in double quotes: ["Label"]
- Allow special characters (){} INSIDE quoted labels
- Use explicit arrow syntax: --> with no spaces
- Ensure all paths are fully connected
- Follow this exact structure:
graph TD
    A["Start"] --> B["Process(input)"]
    B --> C{"Decision?"}
    C -->|Yes| D["Success"]
    C -->|No| E["Retry"]

STRICTLY PROHIBITED:
- Unquoted labels with special characters: [Process()]
- Spaced arrows: -- > instead of -->
- Incomplete paths or hanging connections"#;
