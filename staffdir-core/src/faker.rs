//! Fake job titles for seeding a directory

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

static JOB_TITLES: &[&str] = &[
    "Academic librarian",
    "Accountant, chartered certified",
    "Actuary",
    "Administrator, education",
    "Advertising account planner",
    "Aeronautical engineer",
    "Agricultural consultant",
    "Air traffic controller",
    "Animal nutritionist",
    "Archivist",
    "Art therapist",
    "Barrister",
    "Biomedical scientist",
    "Broadcast engineer",
    "Building surveyor",
    "Careers adviser",
    "Chemical engineer",
    "Chief Executive Officer",
    "Chief Financial Officer",
    "Chief Marketing Officer",
    "Civil engineer, contracting",
    "Clinical psychologist",
    "Commercial art gallery manager",
    "Community pharmacist",
    "Conservation officer, historic buildings",
    "Copywriter, advertising",
    "Counsellor",
    "Data scientist",
    "Database administrator",
    "Dentist",
    "Designer, interior/spatial",
    "Diagnostic radiographer",
    "Editor, magazine features",
    "Electrical engineer",
    "Energy manager",
    "Environmental consultant",
    "Equities trader",
    "Exhibition designer",
    "Financial planner",
    "Fisheries officer",
    "Forensic scientist",
    "Geophysicist/field seismologist",
    "Graphic designer",
    "Health and safety adviser",
    "Higher education lecturer",
    "Horticultural therapist",
    "Hydrographic surveyor",
    "Immigration officer",
    "Information systems manager",
    "Insurance underwriter",
    "IT technical support officer",
    "Journalist, newspaper",
    "Landscape architect",
    "Lawyer",
    "Logistics and distribution manager",
    "Management consultant",
    "Marine scientist",
    "Mechanical engineer",
    "Medical physicist",
    "Museum education officer",
    "Music therapist",
    "Network engineer",
    "Nurse, mental health",
    "Occupational therapist",
    "Operations geologist",
    "Paramedic",
    "Patent attorney",
    "Pharmacologist",
    "Physiotherapist",
    "Production manager",
    "Programmer, systems",
    "Psychiatric nurse",
    "Quantity surveyor",
    "Radio producer",
    "Research officer, trade union",
    "Retail buyer",
    "Sales executive",
    "Secondary school teacher",
    "Software engineer",
    "Sound technician, broadcasting/film/video",
    "Speech and language therapist",
    "Statistician",
    "Structural engineer",
    "Systems analyst",
    "Tax inspector",
    "Technical author",
    "Tourist information centre manager",
    "Town planner",
    "Translator",
    "Travel agency manager",
    "Veterinary surgeon",
    "Video editor",
    "Water engineer",
    "Web designer",
    "Youth worker",
];

/// Random job title source
pub struct JobTitleFaker {
    rng: StdRng,
}

impl JobTitleFaker {
    /// Faker seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Faker with a fixed seed; the same seed yields the same titles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn title(&mut self) -> &'static str {
        JOB_TITLES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Employee")
    }

    pub fn titles(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.title().to_owned()).collect()
    }
}

impl Default for JobTitleFaker {
    fn default() -> Self {
        Self::new()
    }
}
