//! The bundled demonstration case: State v. Marcus Johnson.

use moot_core::case::{Case, Evidence, Witness};
use moot_core::role::CourtRole;
use uuid::Uuid;

/// Builds the sample criminal case (armed robbery of a convenience
/// store). Each call produces a fresh case id.
pub fn sample_case() -> Case {
    let evidence = vec![
        Evidence {
            title: "Security Camera Footage".to_string(),
            description: "Video showing the robbery in progress".to_string(),
            content: "Security camera footage from the convenience store showing a person \
                      matching the defendant's description entering the store at 10:47 PM, \
                      approaching the counter with what appears to be a weapon, and leaving \
                      with cash from the register at 10:52 PM."
                .to_string(),
            evidence_type: "video".to_string(),
            submitted_by: CourtRole::Prosecutor,
            is_admitted: true,
        },
        Evidence {
            title: "Eyewitness Identification".to_string(),
            description: "Store clerk's identification of the defendant".to_string(),
            content: "Store clerk Sarah Martinez identified the defendant in a lineup as the \
                      person who robbed the store. She had a clear view of the perpetrator for \
                      approximately 5 minutes during the incident."
                .to_string(),
            evidence_type: "testimony".to_string(),
            submitted_by: CourtRole::Prosecutor,
            is_admitted: true,
        },
        Evidence {
            title: "Recovered Cash".to_string(),
            description: "Cash found in defendant's possession".to_string(),
            content: "$347 in cash was found in the defendant's jacket pocket when arrested \
                      2 hours after the robbery. The store reported exactly $347 was taken \
                      from the register."
                .to_string(),
            evidence_type: "physical".to_string(),
            submitted_by: CourtRole::Prosecutor,
            is_admitted: true,
        },
        Evidence {
            title: "Alibi Witness Statement".to_string(),
            description: "Friend claims defendant was elsewhere".to_string(),
            content: "Michael Thompson states that the defendant was at his apartment watching \
                      a movie from 10:00 PM to 11:30 PM on the night of the robbery. Phone \
                      records show a call between them at 10:15 PM."
                .to_string(),
            evidence_type: "testimony".to_string(),
            submitted_by: CourtRole::Defense,
            is_admitted: false,
        },
    ];

    let witnesses = vec![
        Witness {
            name: "Sarah Martinez".to_string(),
            background: "Store clerk at QuickMart convenience store. 28 years old, has worked \
                         at the store for 3 years. Good eyesight, no prior issues with \
                         identifying customers."
                .to_string(),
            knowledge: "Was working alone during the night shift when the robbery occurred. \
                        Had a clear view of the perpetrator, who threatened her with what \
                        appeared to be a knife and demanded money from the register."
                .to_string(),
            bias: None,
            called_by: CourtRole::Prosecutor,
        },
        Witness {
            name: "Officer David Kim".to_string(),
            background: "Police officer with 12 years of experience. First responder to the \
                         robbery call. Conducted the arrest of the defendant."
                .to_string(),
            knowledge: "Responded to the robbery call at 11:05 PM. Found the defendant walking \
                        3 blocks from the store at 11:45 PM. Arrested defendant after finding \
                        cash matching the stolen amount in his possession."
                .to_string(),
            bias: None,
            called_by: CourtRole::Prosecutor,
        },
        Witness {
            name: "Michael Thompson".to_string(),
            background: "Friend of the defendant. 30-year-old construction worker. Has known \
                         the defendant for 5 years."
                .to_string(),
            knowledge: "Claims the defendant was at his apartment watching a movie during the \
                        time of the robbery. Says they ordered pizza and the defendant didn't \
                        leave until after midnight."
                .to_string(),
            bias: Some(
                "Friend of the defendant - may be motivated to provide false alibi".to_string(),
            ),
            called_by: CourtRole::Defense,
        },
        Witness {
            name: "Dr. Lisa Chen".to_string(),
            background: "Forensic expert specializing in video analysis. PhD in Computer \
                         Science, 10 years experience in digital forensics."
                .to_string(),
            knowledge: "Analyzed the security camera footage. Can testify about video quality, \
                        lighting conditions, and ability to make positive identification from \
                        the footage."
                .to_string(),
            bias: None,
            called_by: CourtRole::Defense,
        },
    ];

    Case {
        id: Uuid::new_v4(),
        title: "State v. Marcus Johnson".to_string(),
        description: "Armed robbery of a convenience store".to_string(),
        charges: vec![
            "Armed Robbery in the First Degree".to_string(),
            "Assault with a Deadly Weapon".to_string(),
            "Theft in the Second Degree".to_string(),
        ],
        case_facts: "On the evening of March 15, 2024, at approximately 10:47 PM, the QuickMart \
                     convenience store located at 1425 Oak Street was robbed. The perpetrator \
                     entered the store, approached the counter where clerk Sarah Martinez was \
                     working, and demanded money while threatening her with what appeared to be \
                     a knife. The robber took $347 from the cash register and fled on foot. At \
                     11:45 PM police officers found Marcus Johnson walking three blocks from the \
                     crime scene in possession of $347 in cash. Johnson claims he was at his \
                     friend Michael Thompson's apartment during the time of the robbery."
            .to_string(),
        prosecution_theory: "The defendant Marcus Johnson committed armed robbery of the \
                             QuickMart convenience store. He was identified by the victim, \
                             captured on security camera, and found with the exact amount of \
                             stolen cash. His alleged alibi is fabricated by a friend trying to \
                             help him avoid conviction."
            .to_string(),
        defense_theory: "Marcus Johnson is innocent of these charges. The security camera \
                         footage is of poor quality and cannot provide a reliable \
                         identification. The cash found in Mr. Johnson's possession could have \
                         come from any source. Most importantly, Mr. Johnson has a solid alibi."
            .to_string(),
        evidence,
        witnesses,
        legal_precedents: vec![
            "United States v. Wade (1967) - Reliability of eyewitness identification".to_string(),
            "Neil v. Biggers (1972) - Factors for evaluating identification reliability"
                .to_string(),
            "State v. Henderson (2011) - Standards for video evidence authentication".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_case_is_fully_populated() {
        let case = sample_case();
        assert_eq!(case.evidence.len(), 4);
        assert_eq!(case.witnesses.len(), 4);
        assert_eq!(case.charges.len(), 3);
        assert!(case.witness_by_name("Sarah Martinez").is_some());
        assert!(case.witness_by_name("Nobody").is_none());
    }

    #[test]
    fn both_sides_called_witnesses() {
        let case = sample_case();
        assert!(case
            .witnesses
            .iter()
            .any(|w| w.called_by == CourtRole::Prosecutor));
        assert!(case
            .witnesses
            .iter()
            .any(|w| w.called_by == CourtRole::Defense));
    }
}
