use std::collections::HashMap;

use crate::quiz::{Question, Section};

/// Question text, the four options in A-D order, the correct letter.
type Entry = (&'static str, [&'static str; 4], char);

// Adding a section: add a `Section` variant and a row here.
const BUILT_IN: &[(Section, &[Entry])] = &[
    (
        Section::GeneralScience,
        &[
            (
                "What planet is known as the Red Planet?",
                ["Mars", "Venus", "Jupiter", "Mercury"],
                'A',
            ),
            (
                "What is the chemical symbol for water?",
                ["H2O", "O2", "CO2", "HO"],
                'A',
            ),
            ("How many continents are there?", ["5", "6", "7", "8"], 'C'),
            (
                "What gas do plants absorb from the atmosphere?",
                ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
                'C',
            ),
            (
                "What is the hardest natural substance on Earth?",
                ["Gold", "Iron", "Diamond", "Platinum"],
                'C',
            ),
            (
                "What part of the atom has no electric charge?",
                ["Proton", "Neutron", "Electron", "Nucleus"],
                'B',
            ),
            (
                "What is the main gas found in the air we breathe?",
                ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
                'B',
            ),
            (
                "What force keeps us on the ground?",
                ["Magnetism", "Friction", "Gravity", "Inertia"],
                'C',
            ),
            (
                "Which organ in the human body is primarily responsible for detoxification?",
                ["Kidneys", "Liver", "Lungs", "Heart"],
                'B',
            ),
            (
                "What is the phenomenon where a moving object emits a sound that increases in frequency as it approaches an observer and decreases as it moves away?",
                ["Doppler Effect", "Refraction", "Diffraction", "Interference"],
                'A',
            ),
            (
                "If a train travels 60 kilometers in 1 hour, how many minutes does it take to travel 180 kilometers?",
                ["60 mins", "120 mins", "180 mins", "90 mins"],
                'C',
            ),
        ],
    ),
    (
        Section::Biology,
        &[
            (
                "What is the powerhouse of the cell?",
                ["Ribosome", "Mitochondria", "Nucleus", "Golgi"],
                'B',
            ),
            (
                "Human blood type O is often called?",
                ["Universal donor", "Universal recipient", "Rare", "None"],
                'A',
            ),
            (
                "Why do your fingers and toes get wrinkled when you spend a long time in water?",
                [
                    "The outer layer of your skin absorbs water and swells up.",
                    "It is an automatic nervous system response that is thought to have evolved to help with gripping wet objects.",
                    "The skin contracts to prevent water loss from the body.",
                    "The cold water causes the blood vessels to constrict, wrinkling the skin.",
                ],
                'B',
            ),
        ],
    ),
    (
        Section::Geography,
        &[
            (
                "What is the capital of Australia?",
                ["Sydney", "Melbourne", "Canberra", "Brisbane"],
                'C',
            ),
            (
                "Which is the largest ocean?",
                ["Atlantic", "Pacific", "Indian", "Arctic"],
                'B',
            ),
            (
                "The Nile river flows into which sea?",
                ["Red Sea", "Mediterranean", "Black Sea", "Arabian"],
                'B',
            ),
            (
                "What is the name of the tallest mountain in the world?",
                ["Mount Fuji", "Mount Kilimanjaro", "Mount Everest", "Mount Olympus"],
                'C',
            ),
        ],
    ),
];

/// Read-only questions for every section, built once at startup.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: HashMap<Section, Vec<Question>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        let questions = BUILT_IN
            .iter()
            .map(|(section, entries)| {
                let list = entries
                    .iter()
                    .filter_map(|(text, options, correct)| {
                        let question = Question::new(*text, *options, *correct);
                        if question.is_none() {
                            log::warn!("Skipping question with invalid answer {correct:?}: {text}");
                        }
                        question
                    })
                    .collect();
                (*section, list)
            })
            .collect();

        Self { questions }
    }

    /// Sections in menu order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|s| self.questions.contains_key(s))
    }

    /// Questions of `section` in the order they are asked.
    pub fn questions(&self, section: Section) -> &[Question] {
        self.questions
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::OptionLetter;

    #[test]
    fn every_section_has_its_questions() {
        let bank = QuestionBank::new();
        assert_eq!(bank.questions(Section::GeneralScience).len(), 11);
        assert_eq!(bank.questions(Section::Biology).len(), 3);
        assert_eq!(bank.questions(Section::Geography).len(), 4);
        assert_eq!(bank.sections().collect::<Vec<_>>(), Section::ALL.to_vec());
    }

    #[test]
    fn built_in_table_has_no_invalid_rows() {
        let rows: usize = BUILT_IN.iter().map(|(_, entries)| entries.len()).sum();
        let bank = QuestionBank::new();
        let built: usize = Section::ALL.iter().map(|s| bank.questions(*s).len()).sum();
        assert_eq!(rows, built);
    }

    #[test]
    fn questions_keep_table_order() {
        let bank = QuestionBank::new();
        let geo = bank.questions(Section::Geography);
        assert_eq!(geo[0].text, "What is the capital of Australia?");
        assert_eq!(geo[0].correct, OptionLetter::C);
        assert_eq!(geo[0].options[OptionLetter::C.index()], "Canberra");
        assert_eq!(geo[3].options[2], "Mount Everest");
    }
}
