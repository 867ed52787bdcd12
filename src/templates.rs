//! NEET-style question templates.
//!
//! Each known subject owns an ordered list of chapter labels and five
//! parametrized templates. A template is picked by rotating index, worded
//! according to difficulty, and prefixed with the chapter label. Subjects
//! without a table fall back to a generic placeholder question.

use crate::model::{lettered_options, AnswerOption, Difficulty, OptionId};

/// Rendered content of one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub correct: OptionId,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// Template body before the chapter label prefix is applied.
/// Option texts are given in A..D order, so `correct` always names one of them.
struct Draft {
    question: String,
    options: [String; 4],
    correct: OptionId,
    explanation: String,
}

type TemplateFn = fn(&str, Difficulty) -> Draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Physics,
    Chemistry,
    Botany,
    Zoology,
}

impl Subject {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Physics" => Some(Subject::Physics),
            "Chemistry" => Some(Subject::Chemistry),
            "Botany" => Some(Subject::Botany),
            "Zoology" => Some(Subject::Zoology),
            _ => None,
        }
    }

    pub fn chapter_labels(self) -> &'static [&'static str] {
        match self {
            Subject::Physics => PHYSICS_TOPICS,
            Subject::Chemistry => CHEMISTRY_TOPICS,
            Subject::Botany => BOTANY_TOPICS,
            Subject::Zoology => ZOOLOGY_TOPICS,
        }
    }

    fn templates(self) -> &'static [TemplateFn] {
        match self {
            Subject::Physics => PHYSICS_TEMPLATES,
            Subject::Chemistry => CHEMISTRY_TEMPLATES,
            Subject::Botany => BOTANY_TEMPLATES,
            Subject::Zoology => ZOOLOGY_TEMPLATES,
        }
    }

    /// Label for a chapter, clamped to the last entry past the end of the list.
    pub fn chapter_label(self, chapter: u32) -> &'static str {
        let labels = self.chapter_labels();
        let idx = (chapter.saturating_sub(1) as usize).min(labels.len() - 1);
        labels[idx]
    }
}

/// Select and render the template for `(subject, chapter, difficulty, index)`.
pub fn select_template(
    subject: &str,
    chapter: u32,
    difficulty: Difficulty,
    index: usize,
) -> QuestionTemplate {
    let Some(subject) = Subject::from_name(subject) else {
        return generic_template(subject, chapter, difficulty, index);
    };

    let label = subject.chapter_label(chapter);
    let templates = subject.templates();
    let draft = templates[index % templates.len()](label, difficulty);

    QuestionTemplate {
        question: format!("[{}] {}", label, draft.question),
        options: lettered_options(draft.options),
        correct: draft.correct,
        explanation: draft.explanation,
        difficulty,
    }
}

fn generic_template(subject: &str, chapter: u32, difficulty: Difficulty, index: usize) -> QuestionTemplate {
    QuestionTemplate {
        question: format!(
            "{} Chapter {} - NEET Level Question {} (Difficulty: {})",
            subject,
            chapter,
            index + 1,
            difficulty.level()
        ),
        options: lettered_options([
            "Option A - First possibility".into(),
            "Option B - Second possibility".into(),
            "Option C - Third possibility".into(),
            "Option D - Fourth possibility".into(),
        ]),
        correct: OptionId::ALL[index % OptionId::ALL.len()],
        explanation: format!("Detailed explanation for {} chapter {} question.", subject, chapter),
        difficulty,
    }
}

fn by_level<'a>(d: Difficulty, easy: &'a str, medium: &'a str, hard: &'a str) -> &'a str {
    match d {
        Difficulty::Easy => easy,
        Difficulty::Medium => medium,
        Difficulty::Hard => hard,
    }
}

fn opts(a: &str, b: &str, c: &str, d: &str) -> [String; 4] {
    [a.to_string(), b.to_string(), c.to_string(), d.to_string()]
}

// ─── Physics ────────────────────────────────────────────────────

const PHYSICS_TOPICS: &[&str] = &[
    "Units and Measurement", "Kinematics", "Laws of Motion", "Work Energy Power",
    "Rotational Motion", "Gravitation", "Properties of Matter", "Thermodynamics",
    "Kinetic Theory", "Oscillations", "Waves", "Electrostatics",
    "Current Electricity", "Magnetic Effects", "Electromagnetic Induction", "AC Circuits",
    "EM Waves", "Ray Optics", "Wave Optics", "Dual Nature",
    "Atoms", "Nuclei", "Semiconductors", "Communication",
];

const PHYSICS_TEMPLATES: &[TemplateFn] = &[
    physics_displacement,
    physics_resultant_angle,
    physics_energy_conservation,
    physics_dimensions,
    physics_measurement_errors,
];

fn physics_displacement(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "A particle moving with {} acceleration in {}. What is the magnitude of displacement after time t?",
            by_level(d, "constant", "uniformly varying", "non-uniform"),
            topic
        ),
        options: opts("ut + (1/2)at²", "ut - (1/2)at²", "vt + (1/2)at²", "(v² - u²)/2a"),
        correct: OptionId::A,
        explanation: format!(
            "For {}, displacement with initial velocity u and constant acceleration a is given by s = ut + (1/2)at². This is derived from kinematic equations.",
            topic
        ),
    }
}

fn physics_resultant_angle(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In {}, two {} forces act on a body. The resultant force has magnitude R. What is the angle between the forces if their magnitudes are F₁ and F₂?",
            topic,
            if d == Difficulty::Easy { "equal" } else { "unequal" }
        ),
        options: opts(
            "θ = cos⁻¹[(R² - F₁² - F₂²)/(2F₁F₂)]",
            "θ = cos⁻¹[(F₁² + F₂² - R²)/(2F₁F₂)]",
            "θ = sin⁻¹[(R² - F₁² - F₂²)/(2F₁F₂)]",
            "θ = tan⁻¹[(R² - F₁² - F₂²)/(2F₁F₂)]",
        ),
        correct: OptionId::B,
        explanation: "Using the parallelogram law of vector addition: R² = F₁² + F₂² + 2F₁F₂cosθ. Rearranging gives θ = cos⁻¹[(F₁² + F₂² - R²)/(2F₁F₂)].".into(),
    }
}

fn physics_energy_conservation(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "A {} {} system has {} degree(s) of freedom. What is the energy conservation principle applied?",
            if d == Difficulty::Hard { "non-uniform" } else { "uniform" },
            topic,
            by_level(d, "one", "two", "multiple")
        ),
        options: opts(
            "Total mechanical energy (KE + PE) remains constant in absence of non-conservative forces",
            "Kinetic energy alone remains constant",
            "Potential energy alone remains constant",
            "Total energy increases linearly with time",
        ),
        correct: OptionId::A,
        explanation: format!(
            "In {}, when only conservative forces act, total mechanical energy (KE + PE) is conserved. This is a fundamental principle in mechanics.",
            topic
        ),
    }
}

fn physics_dimensions(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "The dimensional formula of {} related quantity is [M^a L^b T^c]. If the quantity represents {}, what are the values?",
            topic,
            by_level(d, "velocity", "acceleration", "force")
        ),
        options: opts(
            "a=0, b=1, c=-1 for velocity",
            "a=0, b=1, c=-2 for acceleration",
            "a=1, b=1, c=-2 for force",
            "All of the above are correct",
        ),
        correct: OptionId::D,
        explanation: format!(
            "Dimensional analysis in {}: Velocity [LT⁻¹], Acceleration [LT⁻²], Force [MLT⁻²]. Each follows from fundamental definitions.",
            topic
        ),
    }
}

fn physics_measurement_errors(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In an experiment on {}, {} errors are present. What is the best method to minimize total error?",
            topic,
            by_level(d, "systematic", "random", "both systematic and random")
        ),
        options: opts(
            "Take multiple readings and calculate mean to reduce random errors",
            "Calibrate instruments properly to eliminate systematic errors",
            "Use least count method for precision",
            "Apply both calibration and statistical averaging",
        ),
        correct: OptionId::D,
        explanation: format!(
            "For {} experiments: Systematic errors require calibration; random errors are reduced by averaging multiple measurements. Best practice uses both approaches.",
            topic
        ),
    }
}

// ─── Chemistry ──────────────────────────────────────────────────

const CHEMISTRY_TOPICS: &[&str] = &[
    "Mole Concept", "Atomic Structure", "Periodic Table", "Chemical Bonding",
    "States of Matter", "Thermodynamics", "Equilibrium", "Redox Reactions",
    "Hydrogen", "S-Block", "P-Block", "D-Block",
    "Organic Basics", "Hydrocarbons", "Haloalkanes", "Alcohols",
    "Aldehydes Ketones", "Carboxylic Acids", "Amines", "Biomolecules",
    "Polymers", "Chemistry in Everyday Life", "Surface Chemistry", "Electrochemistry",
];

const CHEMISTRY_TEMPLATES: &[TemplateFn] = &[
    chemistry_moles,
    chemistry_configuration,
    chemistry_ionization,
    chemistry_geometry,
    chemistry_equilibrium,
];

fn chemistry_moles(_topic: &str, d: Difficulty) -> Draft {
    let mass = by_level(d, "22g", "44g", "88g");
    Draft {
        question: format!("Calculate the number of moles in {} of CO₂. (Atomic mass: C=12, O=16)", mass),
        options: opts(
            "0.5 mol",
            "1.0 mol",
            "2.0 mol",
            &format!("{} mol", by_level(d, "0.5", "1.0", "2.0")),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Molar mass of CO₂ = 12 + 2(16) = 44 g/mol. Number of moles = mass/molar mass. For {}: n = {} mol.",
            mass,
            by_level(d, "22/44 = 0.5", "44/44 = 1.0", "88/44 = 2.0")
        ),
    }
}

fn chemistry_configuration(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "Which electronic configuration represents {} in ground state for {}?",
            by_level(d, "a neutral atom", "a cation", "an anion"),
            topic
        ),
        options: opts(
            "1s² 2s² 2p⁶ 3s² 3p⁶",
            "1s² 2s² 2p⁶ 3s² 3p⁵",
            "1s² 2s² 2p⁶ 3s² 3p⁶ 4s¹",
            "1s² 2s² 2p⁶ 3s² 3p⁶ 3d¹⁰",
        ),
        correct: match d {
            Difficulty::Easy => OptionId::A,
            Difficulty::Medium => OptionId::B,
            Difficulty::Hard => OptionId::C,
        },
        explanation: format!(
            "For {}: {}. Electronic configuration follows Aufbau principle and Hund's rule.",
            topic,
            by_level(
                d,
                "Noble gas configuration (Ar) is most stable",
                "Chlorine has 17 electrons in neutral state",
                "K has 19 electrons with 4s¹ in ground state",
            )
        ),
    }
}

fn chemistry_ionization(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In {}, the {} ionization energy of an element is {}. This is because:",
            topic,
            by_level(d, "first", "second", "third"),
            by_level(d, "lowest", "moderate", "highest")
        ),
        options: opts(
            "Removing electron from neutral atom requires least energy",
            "Nuclear charge increases after each ionization",
            "Effective nuclear charge increases with successive ionization",
            "Electron-electron repulsion decreases after each removal",
        ),
        correct: OptionId::C,
        explanation: format!(
            "Successive ionization energies increase because: (1) electrons are removed from increasingly positive ions, (2) remaining electrons experience greater effective nuclear charge, (3) electron shielding decreases. This is fundamental in {}.",
            topic
        ),
    }
}

fn chemistry_geometry(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "The {} of {} in {} shows:",
            by_level(d, "Lewis structure", "VSEPR geometry", "hybridization"),
            by_level(d, "H₂O", "NH₃", "CH₄"),
            topic
        ),
        options: opts(
            by_level(
                d,
                "Bent shape with 2 lone pairs on oxygen",
                "Trigonal pyramidal with 1 lone pair",
                "Tetrahedral with sp³ hybridization",
            ),
            "Linear geometry with no lone pairs",
            "Trigonal planar with sp² hybridization",
            "Octahedral with sp³d² hybridization",
        ),
        correct: OptionId::A,
        explanation: format!(
            "For {}: {}. Lone pairs cause greater repulsion than bond pairs.",
            topic,
            by_level(
                d,
                "H₂O has bent shape (104.5°) due to 2 lone pairs on O",
                "NH₃ is trigonal pyramidal (107°) with 1 lone pair on N",
                "CH₄ is perfectly tetrahedral (109.5°) with sp³ hybridization",
            )
        ),
    }
}

fn chemistry_equilibrium(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "For the equilibrium reaction in {}: N₂ + 3H₂ ⇌ 2NH₃, ΔH = -92 kJ. What happens when {}?",
            topic,
            by_level(d, "temperature is increased", "pressure is increased", "a catalyst is added")
        ),
        options: opts(
            by_level(
                d,
                "Equilibrium shifts backward (endothermic direction)",
                "Equilibrium shifts forward (fewer moles side)",
                "Equilibrium is reached faster but position unchanged",
            ),
            "Equilibrium shifts forward",
            "No change in equilibrium position",
            "Kc value changes",
        ),
        correct: OptionId::A,
        explanation: format!(
            "Le Chatelier's Principle in {}: {}. Understanding this is crucial for NEET.",
            topic,
            by_level(
                d,
                "Increasing T favors endothermic (backward) direction",
                "Increasing P favors side with fewer moles (forward, 2 vs 4 moles)",
                "Catalyst only affects rate, not equilibrium position",
            )
        ),
    }
}

// ─── Botany ─────────────────────────────────────────────────────

const BOTANY_TOPICS: &[&str] = &[
    "Biological Classification", "Plant Kingdom", "Morphology", "Anatomy",
    "Cell Structure", "Biomolecules", "Cell Division", "Transport",
    "Photosynthesis", "Respiration", "Plant Growth", "Reproduction",
    "Sexual Reproduction", "Genetics", "Molecular Basis", "Evolution",
    "Health and Disease", "Biodiversity", "Ecosystem", "Environmental Issues",
];

const BOTANY_TEMPLATES: &[TemplateFn] = &[
    botany_classification,
    botany_protein_structure,
    botany_mitosis,
    botany_photosynthesis,
    botany_mendel,
];

fn botany_classification(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In {}, which characteristic distinguishes {}?",
            topic,
            by_level(d, "prokaryotes from eukaryotes", "bacteria from archaea", "monera from protista")
        ),
        options: opts(
            "Presence of membrane-bound nucleus",
            "Peptidoglycan in cell wall",
            "70S vs 80S ribosomes",
            by_level(
                d,
                "Membrane-bound nucleus (absent in prokaryotes)",
                "Cell wall composition (peptidoglycan vs pseudopeptidoglycan)",
                "Nuclear membrane and complexity",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "{}: {}. This is a fundamental distinction in classification.",
            topic,
            by_level(
                d,
                "Prokaryotes lack membrane-bound nucleus and organelles",
                "Bacteria have peptidoglycan; Archaea have pseudopeptidoglycan",
                "Monera are prokaryotic; Protista are eukaryotic unicellular organisms",
            )
        ),
    }
}

fn botany_protein_structure(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "The {} structure of a protein in {} is maintained by:",
            by_level(d, "primary", "secondary", "tertiary"),
            topic
        ),
        options: opts(
            "Peptide bonds between amino acids",
            "Hydrogen bonds, disulfide bridges, and ionic interactions",
            "Hydrophobic interactions and van der Waals forces",
            by_level(
                d,
                "Peptide bonds (covalent)",
                "Hydrogen bonds (α-helix, β-sheet)",
                "Multiple weak forces creating 3D shape",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Protein structure in {}: {}. Essential for NEET biochemistry.",
            topic,
            by_level(
                d,
                "1° structure is amino acid sequence (peptide bonds)",
                "2° structure includes α-helix and β-sheets (H-bonds)",
                "3° structure is overall 3D folding (multiple interactions)",
            )
        ),
    }
}

fn botany_mitosis(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "During {} of mitosis in {}, which event occurs?",
            by_level(d, "prophase", "metaphase", "anaphase"),
            topic
        ),
        options: opts(
            "Chromatin condenses into visible chromosomes",
            "Chromosomes align at the equatorial plate",
            "Sister chromatids separate and move to opposite poles",
            by_level(
                d,
                "Chromatin condensation and nuclear envelope breakdown",
                "Chromosome alignment at metaphase plate",
                "Chromatid separation and poleward movement",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Cell division in {}: {}. Key for NEET cell biology.",
            topic,
            by_level(
                d,
                "Prophase: chromatin condenses, centrioles migrate, nuclear envelope dissolves",
                "Metaphase: chromosomes align at equator, spindle fully formed",
                "Anaphase: centromeres divide, chromatids separate (2n→2n in mitosis)",
            )
        ),
    }
}

fn botany_photosynthesis(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In the {} reaction of photosynthesis ({}), what is the {}?",
            by_level(d, "light", "dark", "photorespiration"),
            topic,
            by_level(d, "primary product", "carbon fixation enzyme", "competing reaction")
        ),
        options: opts(
            "ATP and NADPH are produced",
            "RuBisCO catalyzes CO₂ fixation",
            "O₂ competes with CO₂ for RuBisCO",
            by_level(
                d,
                "ATP and NADPH from photolysis",
                "RuBisCO fixes CO₂ to RuBP",
                "O₂ binding to RuBisCO causes wasteful pathway",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Photosynthesis in {}: {}. Critical concept for NEET.",
            topic,
            by_level(
                d,
                "Light reactions produce ATP (photophosphorylation) and NADPH (photolysis of water)",
                "Calvin cycle: RuBisCO fixes CO₂ to ribulose bisphosphate forming 3-PGA",
                "Photorespiration: RuBisCO can bind O₂ instead of CO₂, reducing efficiency",
            )
        ),
    }
}

fn botany_mendel(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "Mendel's {} in {} states that:",
            by_level(d, "Law of Segregation", "Law of Independent Assortment", "dihybrid cross ratio"),
            topic
        ),
        options: opts(
            "Alleles separate during gamete formation",
            "Different traits assort independently",
            "F₂ ratio is 9:3:3:1 for two traits",
            by_level(
                d,
                "Each gamete receives one allele per gene",
                "Genes on different chromosomes assort independently",
                "Dihybrid cross yields 9:3:3:1 phenotypic ratio",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Genetics in {}: {}. Fundamental for NEET genetics.",
            topic,
            by_level(
                d,
                "Segregation: paired alleles separate so each gamete has one allele",
                "Independent assortment: genes on different chromosomes distribute independently to gametes",
                "Dihybrid cross (AaBb × AaBb) gives 9:3:3:1 ratio in F₂ generation",
            )
        ),
    }
}

// ─── Zoology ────────────────────────────────────────────────────

const ZOOLOGY_TOPICS: &[&str] = &[
    "Animal Kingdom", "Structural Organization", "Biomolecules", "Digestion",
    "Breathing", "Body Fluids", "Excretion", "Locomotion",
    "Neural Control", "Chemical Coordination", "Reproduction", "Development",
    "Genetics", "Evolution", "Human Health", "Microbes",
    "Biotechnology Principles", "Biotechnology Applications", "Organisms and Population", "Ecosystem",
];

const ZOOLOGY_TEMPLATES: &[TemplateFn] = &[
    zoology_symmetry,
    zoology_digestion,
    zoology_respiration,
    zoology_action_potential,
    zoology_reproduction,
];

fn zoology_symmetry(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "Which phylum in {} exhibits {} ?",
            topic,
            by_level(
                d,
                "radial symmetry",
                "bilateral symmetry with triploblastic organization",
                "segmentation (metameric)",
            )
        ),
        options: opts(
            "Porifera",
            "Cnidaria",
            "Platyhelminthes",
            by_level(
                d,
                "Cnidaria (radially symmetrical)",
                "Platyhelminthes (bilateral, 3 germ layers)",
                "Annelida (metamerically segmented)",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Animal classification in {}: {}. Key for NEET taxonomy.",
            topic,
            by_level(
                d,
                "Cnidaria (jellyfish, hydra) show radial symmetry, diploblastic",
                "Platyhelminthes (flatworms) are bilaterally symmetrical, triploblastic, acoelomate",
                "Annelida (earthworm) show true segmentation with repeated body units",
            )
        ),
    }
}

fn zoology_digestion(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In {}, the {} in gastric digestion:",
            topic,
            by_level(d, "enzyme pepsin", "hormone gastrin", "intrinsic factor")
        ),
        options: opts(
            "Breaks down proteins in acidic pH",
            "Stimulates HCl secretion by parietal cells",
            "Required for vitamin B12 absorption",
            by_level(
                d,
                "Pepsin digests proteins at pH 1.5-2",
                "Gastrin stimulates gastric acid secretion",
                "Intrinsic factor binds B12 for ileal absorption",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Digestive physiology in {}: {}. Important for NEET physiology.",
            topic,
            by_level(
                d,
                "Pepsin (from pepsinogen) digests proteins in acidic stomach pH",
                "Gastrin hormone stimulates HCl and pepsinogen secretion",
                "Intrinsic factor from parietal cells essential for B12 absorption in ileum",
            )
        ),
    }
}

fn zoology_respiration(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "The {} of the respiratory system in {}:",
            by_level(d, "conducting zone", "respiratory zone", "alveolar-capillary"),
            topic
        ),
        options: opts(
            "Includes trachea, bronchi, bronchioles (no gas exchange)",
            "Includes respiratory bronchioles and alveoli (gas exchange)",
            "Membrane where O₂ and CO₂ are exchanged via diffusion",
            by_level(
                d,
                "Conducting zone warms, filters air (anatomical dead space)",
                "Respiratory zone where gas exchange occurs (alveoli)",
                "Thin membrane (0.5 μm) for efficient gas diffusion",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Respiratory system in {}: {}. Critical NEET concept.",
            topic,
            by_level(
                d,
                "Conducting zone: nasal cavity to terminal bronchioles, no gas exchange (150ml dead space)",
                "Respiratory zone: respiratory bronchioles to alveoli, actual gas exchange site",
                "Alveolar-capillary membrane extremely thin for rapid O₂/CO₂ diffusion",
            )
        ),
    }
}

fn zoology_action_potential(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "During {} of a neuron in {}:",
            by_level(d, "depolarization", "repolarization", "hyperpolarization"),
            topic
        ),
        options: opts(
            "Na⁺ channels open, membrane potential becomes positive",
            "K⁺ channels open, membrane potential returns to negative",
            "Membrane potential becomes more negative than resting potential",
            by_level(
                d,
                "Voltage-gated Na⁺ influx (+30 mV)",
                "K⁺ efflux restores negative charge (-70 mV)",
                "Excessive K⁺ efflux (-80 to -90 mV briefly)",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Action potential in {}: {}. Essential for NEET neurophysiology.",
            topic,
            by_level(
                d,
                "Depolarization: Na⁺ rushes in, membrane goes from -70mV to +30mV",
                "Repolarization: K⁺ moves out, membrane returns toward -70mV",
                "Hyperpolarization: undershoot to -80/-90mV before Na⁺-K⁺ pump restores -70mV",
            )
        ),
    }
}

fn zoology_reproduction(topic: &str, d: Difficulty) -> Draft {
    Draft {
        question: format!(
            "In human {} ({}), the significant feature is:",
            by_level(d, "spermatogenesis", "oogenesis", "fertilization"),
            topic
        ),
        options: opts(
            "Continuous process from puberty producing millions of sperm daily",
            "Discontinuous with meiosis I completed at ovulation, meiosis II after fertilization",
            "Fusion of sperm and ovum occurs in ampullary-isthmic junction of fallopian tube",
            by_level(
                d,
                "Spermatogenesis: continuous, ~74 days, millions of sperm",
                "Oogenesis: arrested in prophase I, completed only if fertilized",
                "Fertilization in ampulla; acrosome reaction, cortical reaction prevent polyspermy",
            ),
        ),
        correct: OptionId::D,
        explanation: format!(
            "Reproductive biology in {}: {}. Key NEET reproductive concept.",
            topic,
            by_level(
                d,
                "Spermatogenesis continuous from puberty (Sertoli cells support), produces ~200M sperm/day",
                "Oogenesis: primary oocyte arrests in prophase I until ovulation, secondary oocyte arrests in metaphase II until fertilization",
                "Fertilization: sperm capacitation, acrosome reaction, zona reaction and cortical reaction prevent multiple sperm entry",
            )
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_first_template() {
        let t = select_template("Physics", 1, Difficulty::Easy, 0);
        assert!(t
            .question
            .starts_with("[Units and Measurement] A particle moving with constant acceleration"));
        assert_eq!(t.correct, OptionId::A);
        assert_eq!(t.difficulty, Difficulty::Easy);
        assert_eq!(t.options.len(), 4);
    }

    #[test]
    fn test_selection_is_pure() {
        for subject in ["Physics", "Chemistry", "Botany", "Zoology", "Astronomy"] {
            for d in Difficulty::ALL {
                for index in 0..7 {
                    assert_eq!(
                        select_template(subject, 3, d, index),
                        select_template(subject, 3, d, index)
                    );
                }
            }
        }
    }

    #[test]
    fn test_index_rotates_modulo_template_count() {
        let a = select_template("Botany", 2, Difficulty::Medium, 1);
        let b = select_template("Botany", 2, Difficulty::Medium, 6);
        assert_eq!(a, b);
        let c = select_template("Botany", 2, Difficulty::Medium, 2);
        assert_ne!(a.question, c.question);
    }

    #[test]
    fn test_chapter_label_clamps_to_last() {
        assert_eq!(Subject::Physics.chapter_label(1), "Units and Measurement");
        assert_eq!(Subject::Physics.chapter_label(24), "Communication");
        assert_eq!(Subject::Physics.chapter_label(99), "Communication");
        assert_eq!(Subject::Botany.chapter_label(37), "Environmental Issues");
        assert_eq!(Subject::Zoology.chapter_label(0), "Animal Kingdom");

        let t = select_template("Chemistry", 44, Difficulty::Hard, 2);
        assert!(t.question.starts_with("[Electrochemistry] "));
    }

    #[test]
    fn test_difficulty_changes_wording() {
        let easy = select_template("Physics", 2, Difficulty::Easy, 0);
        let hard = select_template("Physics", 2, Difficulty::Hard, 0);
        assert!(easy.question.contains("constant acceleration"));
        assert!(hard.question.contains("non-uniform acceleration"));

        let medium = select_template("Chemistry", 1, Difficulty::Medium, 1);
        assert_eq!(medium.correct, OptionId::B);
    }

    #[test]
    fn test_correct_answer_always_listed() {
        for subject in ["Physics", "Chemistry", "Botany", "Zoology", "Astronomy"] {
            for d in Difficulty::ALL {
                for index in 0..10 {
                    let t = select_template(subject, 5, d, index);
                    assert!(t.options.iter().any(|o| o.id == t.correct));
                    let ids: Vec<_> = t.options.iter().map(|o| o.id).collect();
                    assert_eq!(ids, OptionId::ALL.to_vec());
                }
            }
        }
    }

    #[test]
    fn test_generic_fallback() {
        let t = select_template("Astronomy", 3, Difficulty::Medium, 5);
        assert_eq!(
            t.question,
            "Astronomy Chapter 3 - NEET Level Question 6 (Difficulty: 2)"
        );
        assert_eq!(t.correct, OptionId::B);
        assert_eq!(t.options[3].text, "Option D - Fourth possibility");
        assert_eq!(t.explanation, "Detailed explanation for Astronomy chapter 3 question.");
    }
}
