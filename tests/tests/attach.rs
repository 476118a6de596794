//! Attachment scenarios: linking parents, siblings, partners, children.

use kin_core::Gender;
use kin_engine::EngineError;
use kin_rules::Violation;
use kin_tests::{engine, man, pid, woman};

mod parents {
    use super::*;

    #[test]
    fn test_older_person_becomes_parent_younger_does_not() {
        // GIVEN
        let engine = engine();
        let elder = man(&engine, "Adam", 1950);
        let junior = man(&engine, "Cain", 1980);

        // WHEN - the elder becomes the junior's father
        let family = engine
            .add_parent(&pid(&junior), &pid(&elder), Gender::Man)
            .unwrap();

        // THEN
        assert_eq!(family.father_id, Some(elder.id));
        assert!(family.has_child(junior.id));

        // WHEN - the junior is proposed as the elder's father
        let result = engine.add_parent(&pid(&elder), &pid(&junior), Gender::Man);

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::ParentNotOlder)
        );
    }

    #[test]
    fn test_attaching_same_parent_twice_is_idempotent() {
        // GIVEN
        let engine = engine();
        let mother = woman(&engine, "Eve", 1950);
        let child = man(&engine, "Cain", 1980);

        // WHEN
        let first = engine
            .add_parent(&pid(&child), &pid(&mother), Gender::Woman)
            .unwrap();
        let second = engine
            .add_parent(&pid(&child), &pid(&mother), Gender::Woman)
            .unwrap();

        // THEN - the same family record, no duplicate edge
        assert_eq!(first.id, second.id);
        assert_eq!(second.children, vec![child.id]);
    }

    #[test]
    fn test_second_parent_fills_the_empty_slot() {
        // GIVEN - a child already attached to their mother
        let engine = engine();
        let mother = woman(&engine, "Eve", 1950);
        let father = man(&engine, "Adam", 1948);
        let child = man(&engine, "Cain", 1980);
        let with_mother = engine
            .add_parent(&pid(&child), &pid(&mother), Gender::Woman)
            .unwrap();

        // WHEN
        let family = engine
            .add_parent(&pid(&child), &pid(&father), Gender::Man)
            .unwrap();

        // THEN - the same family now carries both parents
        assert_eq!(family.id, with_mother.id);
        assert_eq!(family.father_id, Some(father.id));
        assert_eq!(family.mother_id, Some(mother.id));
    }

    #[test]
    fn test_sibling_cannot_become_parent() {
        // GIVEN - two siblings
        let engine = engine();
        let elder = man(&engine, "Abel", 1950);
        let junior = man(&engine, "Cain", 1980);
        engine.add_sibling(&pid(&junior), &pid(&elder)).unwrap();

        // WHEN
        let result = engine.add_parent(&pid(&junior), &pid(&elder), Gender::Man);

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::SiblingAsParent)
        );
    }

    #[test]
    fn test_partner_cannot_become_parent() {
        // GIVEN - a couple
        let engine = engine();
        let husband = man(&engine, "Adam", 1950);
        let wife = woman(&engine, "Eve", 1952);
        engine.add_partner(&pid(&husband), &pid(&wife)).unwrap();

        // WHEN - the older partner is proposed as the other's father
        let result = engine.add_parent(&pid(&wife), &pid(&husband), Gender::Man);

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::PartnersAsParentChild)
        );
    }

    #[test]
    fn test_parent_younger_than_an_existing_child_is_rejected() {
        // GIVEN - a child of 1940 already in the family
        let engine = engine();
        let mother = woman(&engine, "Eve", 1920);
        let elder_child = man(&engine, "Abel", 1940);
        let junior_child = man(&engine, "Cain", 1980);
        engine
            .add_parent(&pid(&elder_child), &pid(&mother), Gender::Woman)
            .unwrap();
        engine
            .add_sibling(&pid(&elder_child), &pid(&junior_child))
            .unwrap();

        // WHEN - a father born after the elder child
        let late_father = man(&engine, "Adam", 1960);
        let result = engine.add_parent(&pid(&junior_child), &pid(&late_father), Gender::Man);

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::ParentNotOlder)
        );
    }
}

mod siblings {
    use super::*;

    #[test]
    fn test_siblings_share_one_child_family() {
        // GIVEN
        let engine = engine();
        let first = man(&engine, "Abel", 1978);
        let second = woman(&engine, "Awan", 1981);

        // WHEN
        let family = engine.add_sibling(&pid(&first), &pid(&second)).unwrap();

        // THEN - both are children of the same record
        assert!(family.has_child(first.id));
        assert!(family.has_child(second.id));

        // WHEN - linked again, in either direction
        let again = engine.add_sibling(&pid(&second), &pid(&first)).unwrap();

        // THEN
        assert_eq!(again.id, family.id);
        assert_eq!(again.children.len(), 2);
    }

    #[test]
    fn test_parent_and_child_cannot_be_siblings() {
        // GIVEN
        let engine = engine();
        let father = man(&engine, "Adam", 1950);
        let child = man(&engine, "Cain", 1980);
        engine
            .add_parent(&pid(&child), &pid(&father), Gender::Man)
            .unwrap();

        // WHEN/THEN - rejected from both directions
        assert_eq!(
            engine
                .add_sibling(&pid(&child), &pid(&father))
                .unwrap_err(),
            EngineError::Logic(Violation::ParentAsSibling)
        );
        assert_eq!(
            engine
                .add_sibling(&pid(&father), &pid(&child))
                .unwrap_err(),
            EngineError::Logic(Violation::ParentAsSibling)
        );
    }

    #[test]
    fn test_sibling_older_than_a_parent_is_rejected() {
        // GIVEN - a child whose mother was born 1950
        let engine = engine();
        let mother = woman(&engine, "Eve", 1950);
        let child = man(&engine, "Cain", 1975);
        engine
            .add_parent(&pid(&child), &pid(&mother), Gender::Woman)
            .unwrap();

        // WHEN - a sibling born before the mother
        let elder = man(&engine, "Melchizedek", 1940);
        let result = engine.add_sibling(&pid(&child), &pid(&elder));

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::ParentNotOlder)
        );
    }

    #[test]
    fn test_partners_cannot_be_siblings() {
        // GIVEN
        let engine = engine();
        let husband = man(&engine, "Adam", 1950);
        let wife = woman(&engine, "Eve", 1952);
        engine.add_partner(&pid(&husband), &pid(&wife)).unwrap();

        // WHEN
        let result = engine.add_sibling(&pid(&husband), &pid(&wife));

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::PartnersAsSiblings)
        );
    }
}

mod partners {
    use super::*;

    #[test]
    fn test_attaching_same_partner_twice_is_idempotent() {
        // GIVEN
        let engine = engine();
        let husband = man(&engine, "Adam", 1950);
        let wife = woman(&engine, "Eve", 1952);

        // WHEN
        let first = engine.add_partner(&pid(&husband), &pid(&wife)).unwrap();
        let second = engine.add_partner(&pid(&husband), &pid(&wife)).unwrap();

        // THEN
        assert_eq!(first.id, second.id);
        assert_eq!(second.father_id, Some(husband.id));
        assert_eq!(second.mother_id, Some(wife.id));
    }

    #[test]
    fn test_siblings_cannot_be_partners() {
        // GIVEN
        let engine = engine();
        let brother = man(&engine, "Cain", 1970);
        let sister = woman(&engine, "Awan", 1972);
        engine.add_sibling(&pid(&brother), &pid(&sister)).unwrap();

        // WHEN
        let result = engine.add_partner(&pid(&brother), &pid(&sister));

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::PartnersAsSiblings)
        );
    }

    #[test]
    fn test_own_child_cannot_be_partner() {
        // GIVEN
        let engine = engine();
        let father = man(&engine, "Adam", 1950);
        let daughter = woman(&engine, "Awan", 1980);
        engine.add_child(&pid(&father), &pid(&daughter)).unwrap();

        // WHEN/THEN - rejected from both directions
        assert_eq!(
            engine
                .add_partner(&pid(&father), &pid(&daughter))
                .unwrap_err(),
            EngineError::Logic(Violation::ChildAsPartner)
        );
        assert_eq!(
            engine
                .add_partner(&pid(&daughter), &pid(&father))
                .unwrap_err(),
            EngineError::Logic(Violation::ParentAsPartner)
        );
    }
}

mod children {
    use super::*;

    #[test]
    fn test_both_partners_children_land_in_one_family() {
        // GIVEN - a couple
        let engine = engine();
        let father = man(&engine, "Adam", 1950);
        let mother = woman(&engine, "Eve", 1952);
        let couple = engine.add_partner(&pid(&father), &pid(&mother)).unwrap();

        // WHEN - each partner attaches one child
        let first = man(&engine, "Cain", 1975);
        let second = man(&engine, "Abel", 1978);
        let by_father = engine.add_child(&pid(&father), &pid(&first)).unwrap();
        let by_mother = engine.add_child(&pid(&mother), &pid(&second)).unwrap();

        // THEN - one family holds the couple and both children
        assert_eq!(by_father.id, couple.id);
        assert_eq!(by_mother.id, couple.id);
        assert_eq!(by_mother.children, vec![first.id, second.id]);
    }

    #[test]
    fn test_child_older_than_the_parent_is_rejected() {
        // GIVEN
        let engine = engine();
        let parent = man(&engine, "Adam", 1950);
        let elder = man(&engine, "Melchizedek", 1940);

        // WHEN
        let result = engine.add_child(&pid(&parent), &pid(&elder));

        // THEN
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::ParentNotOlder)
        );
    }

    #[test]
    fn test_child_from_another_family_is_a_conflict() {
        // GIVEN - a child already attached to their mother
        let engine = engine();
        let mother = woman(&engine, "Eve", 1950);
        let child = man(&engine, "Cain", 1980);
        engine
            .add_parent(&pid(&child), &pid(&mother), Gender::Woman)
            .unwrap();

        // WHEN - a stranger claims the child
        let stranger = man(&engine, "Melchizedek", 1945);
        let result = engine.add_child(&pid(&stranger), &pid(&child));

        // THEN - the conflict aborts and the stranger's fresh family is
        // rolled back with it
        assert_eq!(
            result.unwrap_err(),
            EngineError::Logic(Violation::CrossFamily)
        );
        assert!(matches!(
            engine.parent_family(&pid(&stranger)).unwrap_err(),
            EngineError::NotFound(_)
        ));
    }

    #[test]
    fn test_no_person_ever_appears_in_their_own_children() {
        // GIVEN - a family built through every attachment path
        let engine = engine();
        let father = man(&engine, "Adam", 1950);
        let mother = woman(&engine, "Eve", 1952);
        let child = man(&engine, "Cain", 1975);
        let sibling = woman(&engine, "Awan", 1977);
        engine.add_partner(&pid(&father), &pid(&mother)).unwrap();
        engine.add_child(&pid(&father), &pid(&child)).unwrap();
        let family = engine.add_sibling(&pid(&child), &pid(&sibling)).unwrap();

        // THEN
        let father_slot = family.father_id.unwrap();
        let mother_slot = family.mother_id.unwrap();
        assert!(!family.has_child(father_slot));
        assert!(!family.has_child(mother_slot));
    }
}
