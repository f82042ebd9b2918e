//=========================================================================
// Load Request Validation
//=========================================================================
//
// Checks caller-supplied scene names before any host call is made.
//
// Two input shapes are accepted:
//   - typed:    &[S]                 (elements present, may be empty)
//   - nullable: Option<&[Option<S>]> (bindings / scripting boundary)
//
// Validation never checks that a name denotes a real scene; that failure
// surfaces later from the host.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::SceneId;

//=== ValidationError =====================================================

/// Invalid-argument conditions detected before loading starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The scene list argument itself was absent.
    #[error("scene list is missing")]
    MissingSceneList,

    /// An element of the scene list was absent or empty.
    #[error("scene list contains an absent or empty name at index {index}")]
    InvalidSceneElement { index: usize },

    /// A single scene name was absent, empty or whitespace-only.
    #[error("scene name is missing or blank")]
    BlankSceneName,
}

//=== Validation ==========================================================

/// Validates a nullable scene list.
///
/// Fails with [`ValidationError::MissingSceneList`] when `names` is `None`
/// and with [`ValidationError::InvalidSceneElement`] for the first absent
/// or empty element.
///
/// `Some("")` counts as absent on purpose: [`validate_scenes`] cannot tell
/// an empty name from a missing one, and both forms accept the same names.
pub fn validate_scene_list<S: AsRef<str>>(
    names: Option<&[Option<S>]>,
) -> Result<Vec<SceneId>, ValidationError> {
    let names = names.ok_or(ValidationError::MissingSceneList)?;

    names
        .iter()
        .enumerate()
        .map(|(index, name)| match name {
            Some(name) => element(index, name.as_ref()),
            None => Err(ValidationError::InvalidSceneElement { index }),
        })
        .collect()
}

/// Validates a scene list whose elements are all present.
pub fn validate_scenes<S: AsRef<str>>(names: &[S]) -> Result<Vec<SceneId>, ValidationError> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| element(index, name.as_ref()))
        .collect()
}

/// Validates a single scene name.
///
/// Stricter than list elements: whitespace-only names are rejected too.
pub fn validate_scene_name(name: Option<&str>) -> Result<SceneId, ValidationError> {
    let name = name.ok_or(ValidationError::BlankSceneName)?;
    SceneId::new(name)
}

fn element(index: usize, name: &str) -> Result<SceneId, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidSceneElement { index });
    }
    Ok(SceneId::from_validated(name.to_owned()))
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_list_is_distinct_from_invalid_element() {
        let missing = validate_scene_list::<&str>(None).unwrap_err();
        let invalid = validate_scene_list(Some(&[Some("Main"), None][..])).unwrap_err();

        assert_eq!(missing, ValidationError::MissingSceneList);
        assert_eq!(invalid, ValidationError::InvalidSceneElement { index: 1 });
        assert_ne!(missing, invalid);
    }

    #[test]
    fn first_invalid_element_is_reported() {
        let names = [Some("A"), Some(""), None];
        assert_eq!(
            validate_scene_list(Some(&names[..])),
            Err(ValidationError::InvalidSceneElement { index: 1 })
        );
    }

    #[test]
    fn both_list_forms_reject_empty_names_alike() {
        let typed = validate_scenes(&["Main", ""]);
        let nullable = validate_scene_list(Some(&[Some("Main"), Some("")][..]));

        assert_eq!(typed, Err(ValidationError::InvalidSceneElement { index: 1 }));
        assert_eq!(nullable, typed);
    }

    #[test]
    fn list_keeps_order() {
        let ids = validate_scenes(&["Main", "HUD", "Audio"]).unwrap();
        let names: Vec<&str> = ids.iter().map(SceneId::as_str).collect();
        assert_eq!(names, ["Main", "HUD", "Audio"]);
    }

    #[test]
    fn list_elements_allow_whitespace() {
        let ids = validate_scenes(&["Main", "  "]).unwrap();
        assert_eq!(ids[1].as_str(), "  ");
    }

    #[test]
    fn empty_list_is_accepted() {
        let ids = validate_scenes::<&str>(&[]).unwrap();
        assert!(ids.is_empty());
        assert!(validate_scene_list::<String>(Some(&[])).unwrap().is_empty());
    }

    #[test]
    fn single_name_rejects_none_empty_and_whitespace() {
        assert_eq!(validate_scene_name(None), Err(ValidationError::BlankSceneName));
        assert_eq!(validate_scene_name(Some("")), Err(ValidationError::BlankSceneName));
        assert_eq!(validate_scene_name(Some(" ")), Err(ValidationError::BlankSceneName));
        assert_eq!(validate_scene_name(Some("Level1")).unwrap().as_str(), "Level1");
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ValidationError::InvalidSceneElement { index: 3 };
        assert!(err.to_string().contains("index 3"));
        assert_eq!(ValidationError::MissingSceneList.to_string(), "scene list is missing");
    }
}
