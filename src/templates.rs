// WHY: Static planning templates served verbatim; nothing is generated at runtime

use crate::error::PlushError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub body: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "Three-Act Beat Sheet",
        body: "\
ACT I: SETUP
1. Opening Image: a snapshot of the protagonist's world before the story.
2. Inciting Incident: the event that disrupts the status quo.
3. Debate: the protagonist hesitates. What do they stand to lose?
4. Break into Act II: the protagonist commits to the journey.

ACT II: CONFRONTATION
5. Fun and Games: the promise of the premise plays out.
6. Midpoint: a false victory or false defeat raises the stakes.
7. Bad Guys Close In: pressure mounts from outside and within.
8. All Is Lost: the lowest point. Something or someone is lost.

ACT III: RESOLUTION
9. Break into Act III: a new insight points the way forward.
10. Finale: the protagonist confronts the central conflict.
11. Final Image: a mirror of the opening that shows the change.
",
    },
    Template {
        name: "Scene & Chapter Planner",
        body: "\
CHAPTER:
POV CHARACTER:
SETTING (time and place):

SCENE GOAL: what does the POV character want in this scene?
CONFLICT: what stands in the way?
OUTCOME: yes, no, yes-but, or no-and?

OPENING HOOK:
KEY BEATS:
-
-
-
CLOSING HOOK:

CONTINUITY NOTES (names, objects, open threads):
",
    },
    Template {
        name: "Character Profile",
        body: "\
NAME:
AGE:
ROLE IN STORY:

APPEARANCE:
VOICE (speech patterns, favourite phrases):

WANT (external goal):
NEED (internal lesson):
WOUND (backstory that shapes them):
FEAR:

RELATIONSHIPS:
ARC: who are they at the start, and who are they at the end?
",
    },
];

pub fn template(name: &str) -> Result<&'static Template, PlushError> {
    TEMPLATES
        .iter()
        .find(|template| template.name == name)
        .ok_or_else(|| PlushError::UnknownTemplate(name.to_string()))
}

pub fn template_names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|template| template.name)
}
