use std::slice::Iter;

use crate::{CartKey, CatalogError, WorkoutPayload, derive_key};

pub trait CatalogRepository {
    fn read_workouts(
        &self,
        equipment: Equipment,
        difficulty: Difficulty,
    ) -> Result<Vec<Workout>, CatalogError>;
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Kettlebell,
    ResistanceBands,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 4] = [
            Equipment::Bodyweight,
            Equipment::Dumbbells,
            Equipment::Kettlebell,
            Equipment::ResistanceBands,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBands => "Resistance Bands",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// One card of a catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Workout {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub plan: &'static str,
    pub image: &'static str,
    pub rationale: &'static str,
    pub category: &'static str,
    pub mood: &'static str,
    pub tips: &'static [&'static str],
}

impl Workout {
    #[must_use]
    pub fn key(&self, equipment: Equipment, difficulty: Difficulty) -> CartKey {
        derive_key(self.name, equipment.name(), difficulty.name())
    }

    /// Copies the catalog data into an owned payload, so later catalog changes do not leak into
    /// entries that were already added to a cart.
    #[must_use]
    pub fn payload(&self, equipment: Equipment, difficulty: Difficulty) -> WorkoutPayload {
        WorkoutPayload {
            name: self.name.to_string(),
            duration_label: self.duration.to_string(),
            description: self.description.to_string(),
            plan_text: self.plan.to_string(),
            image_ref: self.image.to_string(),
            rationale_text: self.rationale.to_string(),
            context_label: equipment.name().to_string(),
            difficulty_label: difficulty.name().to_string(),
            source_category_label: self.category.to_string(),
            mood_label: self.mood.to_string(),
            tips: self.tips.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Read-only catalog backed by the workouts compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCatalog;

impl CatalogRepository for StaticCatalog {
    fn read_workouts(
        &self,
        equipment: Equipment,
        difficulty: Difficulty,
    ) -> Result<Vec<Workout>, CatalogError> {
        CATALOG
            .iter()
            .find(|s| s.equipment == equipment && s.difficulty == difficulty)
            .map(|s| s.workouts.to_vec())
            .ok_or(CatalogError::NotFound(equipment, difficulty))
    }
}

struct CatalogSection {
    equipment: Equipment,
    difficulty: Difficulty,
    workouts: &'static [Workout],
}

const CATALOG: [CatalogSection; 6] = [
    CatalogSection {
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Beginner,
        workouts: &[
            Workout {
                name: "Goblet Squat",
                duration: "20 min",
                description: "Hold one dumbbell vertically against your chest and squat down \
                    between your knees.",
                plan: "3 rounds: 12 goblet squats, 60 s rest",
                image: "dumbbells/goblet_squat.png",
                rationale: "Builds leg strength while the front load keeps the torso upright.",
                category: "Strength",
                mood: "Focused",
                tips: &[
                    "Keep your elbows inside your knees",
                    "Push the floor away on the way up",
                ],
            },
            Workout {
                name: "Dumbbell Row",
                duration: "15 min",
                description: "Support one hand on a bench and pull the dumbbell towards your hip.",
                plan: "3 rounds: 10 rows per side, 45 s rest",
                image: "dumbbells/dumbbell_row.png",
                rationale: "Strengthens the upper back and balances pressing movements.",
                category: "Strength",
                mood: "Calm",
                tips: &["Keep your back flat", "Lead with the elbow"],
            },
        ],
    },
    CatalogSection {
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Intermediate,
        workouts: &[
            Workout {
                name: "Dumbbell Thruster",
                duration: "25 min",
                description: "Front squat into an overhead press in one fluid movement.",
                plan: "4 rounds: 10 thrusters, 60 s rest",
                image: "dumbbells/thruster.png",
                rationale: "Trains legs and shoulders together and raises the heart rate.",
                category: "Conditioning",
                mood: "Energized",
                tips: &["Drive the press with your legs", "Lock out overhead"],
            },
            Workout {
                name: "Renegade Row",
                duration: "20 min",
                description: "Alternate rows from a plank position on two dumbbells.",
                plan: "4 rounds: 8 rows per side, 60 s rest",
                image: "dumbbells/renegade_row.png",
                rationale: "Combines core stability with upper back strength.",
                category: "Strength",
                mood: "Focused",
                tips: &["Widen your stance for balance", "Avoid rotating the hips"],
            },
            Workout {
                name: "Romanian Deadlift",
                duration: "20 min",
                description: "Hinge at the hips with soft knees, lowering the dumbbells along \
                    your legs.",
                plan: "3 rounds: 12 deadlifts, 90 s rest",
                image: "dumbbells/romanian_deadlift.png",
                rationale: "Loads the hamstrings and glutes through a long range of motion.",
                category: "Strength",
                mood: "Calm",
                tips: &["Push your hips back", "Keep the dumbbells close"],
            },
        ],
    },
    CatalogSection {
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        workouts: &[
            Workout {
                name: "Push-Up",
                duration: "10 min",
                description: "Lower your chest to the floor with a rigid body and press back up.",
                plan: "3 rounds: 8 push-ups, 60 s rest",
                image: "bodyweight/push_up.png",
                rationale: "The classic upper body push that needs no equipment.",
                category: "Strength",
                mood: "Energized",
                tips: &["Squeeze your glutes", "Elevate your hands to make it easier"],
            },
            Workout {
                name: "Glute Bridge",
                duration: "10 min",
                description: "Lie on your back and lift your hips until knees, hips and \
                    shoulders align.",
                plan: "3 rounds: 15 bridges, 45 s rest",
                image: "bodyweight/glute_bridge.png",
                rationale: "Activates the glutes and relieves the lower back.",
                category: "Mobility",
                mood: "Calm",
                tips: &["Pause at the top"],
            },
            Workout {
                name: "Plank",
                duration: "5 min",
                description: "Hold a straight line from head to heels on your forearms.",
                plan: "4 rounds: 30 s hold, 30 s rest",
                image: "bodyweight/plank.png",
                rationale: "Builds the core endurance every other movement relies on.",
                category: "Core",
                mood: "Focused",
                tips: &["Breathe steadily", "Do not let the hips sag"],
            },
        ],
    },
    CatalogSection {
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Advanced,
        workouts: &[Workout {
            name: "Pistol Squat",
            duration: "20 min",
            description: "Squat on one leg while the other leg stays extended in front.",
            plan: "5 rounds: 5 squats per leg, 90 s rest",
            image: "bodyweight/pistol_squat.png",
            rationale: "Demands strength, balance and mobility at the same time.",
            category: "Strength",
            mood: "Focused",
            tips: &["Counterbalance with your arms", "Hold on to a door frame at first"],
        }],
    },
    CatalogSection {
        equipment: Equipment::Kettlebell,
        difficulty: Difficulty::Beginner,
        workouts: &[
            Workout {
                name: "Kettlebell Swing",
                duration: "15 min",
                description: "Hinge and snap your hips to swing the kettlebell to chest height.",
                plan: "10 rounds: 15 swings, 45 s rest",
                image: "kettlebell/swing.png",
                rationale: "Explosive hip extension for power and conditioning.",
                category: "Conditioning",
                mood: "Energized",
                tips: &["The arms only guide the bell", "Stand tall at the top"],
            },
            Workout {
                name: "Goblet Squat",
                duration: "15 min",
                description: "Hold the kettlebell by its horns at your chest and squat down.",
                plan: "3 rounds: 10 squats, 60 s rest",
                image: "kettlebell/goblet_squat.png",
                rationale: "Teaches an upright squat pattern with a light load.",
                category: "Strength",
                mood: "Focused",
                tips: &["Sit between your heels"],
            },
        ],
    },
    CatalogSection {
        equipment: Equipment::ResistanceBands,
        difficulty: Difficulty::Beginner,
        workouts: &[Workout {
            name: "Band Pull Apart",
            duration: "10 min",
            description: "Hold the band at shoulder height and pull it apart to your chest.",
            plan: "3 rounds: 20 pull aparts, 30 s rest",
            image: "bands/pull_apart.png",
            rationale: "Strengthens the rear shoulders and improves posture.",
            category: "Mobility",
            mood: "Calm",
            tips: &["Keep your arms straight", "Squeeze the shoulder blades"],
        }],
    },
];
