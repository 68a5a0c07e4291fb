use heurdesk::models::{CreateIssueInput, Top3Change, Worksheet, WorksheetError};
use speculate2::speculate;

fn add_issue(ws: &mut Worksheet, heuristic_id: u8, severity: u8) -> u32 {
    ws.add_issue(CreateIssueInput {
        heuristic_id,
        severity,
        desc: format!("issue against H{}", heuristic_id),
        solution: "fix it".to_string(),
    })
    .expect("Failed to add issue")
    .id
}

speculate! {
    before {
        #[allow(unused_mut)]
        let mut ws = Worksheet::default();
    }

    describe "group and interface" {
        it "replaces the group wholesale and drops blank member lines" {
            ws.set_group("Team A", "HCI 101", ["  Ana ", "", "Bruno", "   "]);
            assert_eq!(ws.group.name, "Team A");
            assert_eq!(ws.group.members, vec!["Ana".to_string(), "Bruno".to_string()]);

            ws.set_group("Team B", "", Vec::<String>::new());
            assert_eq!(ws.group.name, "Team B");
            assert!(ws.group.members.is_empty());
        }

        it "replaces the interface wholesale and drops blank task lines" {
            ws.set_iface("E-commerce", "Shop", "https://shop.example", ["buy a book", " ", "check out"]);
            assert_eq!(ws.iface.kind, "E-commerce");
            assert_eq!(ws.iface.tasks.len(), 2);
        }
    }

    describe "issue id allocation" {
        it "starts at 1 and increments" {
            assert_eq!(add_issue(&mut ws, 1, 2), 1);
            assert_eq!(add_issue(&mut ws, 2, 3), 2);
            assert_eq!(add_issue(&mut ws, 3, 1), 3);
        }

        it "reuses the id after deleting the highest-id issue" {
            add_issue(&mut ws, 1, 2);
            add_issue(&mut ws, 2, 3);
            let third = add_issue(&mut ws, 3, 1);
            assert_eq!(third, 3);

            ws.delete_issue(3);
            assert_eq!(add_issue(&mut ws, 4, 0), 3);
        }

        it "does not reuse ids freed below the live maximum" {
            add_issue(&mut ws, 1, 2);
            add_issue(&mut ws, 2, 3);
            add_issue(&mut ws, 3, 1);

            ws.delete_issue(1);
            assert_eq!(add_issue(&mut ws, 4, 0), 4);
        }
    }

    describe "issue validation" {
        it "rejects a blank description without mutating" {
            let err = ws.add_issue(CreateIssueInput {
                heuristic_id: 1,
                severity: 2,
                desc: "   ".to_string(),
                solution: "fix".to_string(),
            }).unwrap_err();
            assert_eq!(err, WorksheetError::EmptyField("description"));
            assert!(ws.issues.is_empty());
        }

        it "rejects a blank solution without mutating" {
            let err = ws.add_issue(CreateIssueInput {
                heuristic_id: 1,
                severity: 2,
                desc: "broken".to_string(),
                solution: "".to_string(),
            }).unwrap_err();
            assert_eq!(err, WorksheetError::EmptyField("solution"));
            assert!(ws.issues.is_empty());
        }

        it "rejects severity above 4" {
            let err = ws.add_issue(CreateIssueInput {
                heuristic_id: 1,
                severity: 5,
                desc: "broken".to_string(),
                solution: "fix".to_string(),
            }).unwrap_err();
            assert_eq!(err, WorksheetError::SeverityOutOfRange(5));
            assert!(ws.issues.is_empty());
        }

        it "trims description and solution on the stored issue" {
            ws.add_issue(CreateIssueInput {
                heuristic_id: 1,
                severity: 2,
                desc: "  broken  ".to_string(),
                solution: " fix \n".to_string(),
            }).expect("Failed to add issue");
            assert_eq!(ws.issues[0].desc, "broken");
            assert_eq!(ws.issues[0].solution, "fix");
        }
    }

    describe "delete_issue" {
        it "is a silent no-op for an unknown id" {
            add_issue(&mut ws, 1, 2);
            assert!(!ws.delete_issue(99));
            assert_eq!(ws.issues.len(), 1);
        }

        it "removes the issue from the top 3 atomically" {
            let a = add_issue(&mut ws, 1, 2);
            let b = add_issue(&mut ws, 2, 3);
            ws.toggle_top3(a).expect("Failed to select");
            ws.toggle_top3(b).expect("Failed to select");

            ws.delete_issue(a);
            assert!(ws.issue(a).is_none());
            assert_eq!(ws.top3, vec![b]);
        }
    }

    describe "top-3 selection" {
        it "toggles membership on and off" {
            let a = add_issue(&mut ws, 1, 2);
            assert_eq!(ws.toggle_top3(a), Ok(Top3Change::Added));
            assert_eq!(ws.top3, vec![a]);
            assert_eq!(ws.toggle_top3(a), Ok(Top3Change::Removed));
            assert!(ws.top3.is_empty());
        }

        it "rejects a fourth distinct selection and leaves state unchanged" {
            let ids: Vec<u32> = (0..4).map(|i| add_issue(&mut ws, i + 1, 2)).collect();
            for &id in &ids[..3] {
                ws.toggle_top3(id).expect("Failed to select");
            }

            assert_eq!(ws.toggle_top3(ids[3]), Err(WorksheetError::Top3Full));
            assert_eq!(ws.top3, ids[..3].to_vec());
        }

        it "keeps selection order, not severity order" {
            let low = add_issue(&mut ws, 1, 0);
            let high = add_issue(&mut ws, 2, 4);
            ws.toggle_top3(low).expect("Failed to select");
            ws.toggle_top3(high).expect("Failed to select");

            let picked: Vec<u32> = ws.top3_issues().iter().map(|i| i.id).collect();
            assert_eq!(picked, vec![low, high]);
        }
    }

    describe "review-list ordering" {
        it "sorts by descending severity with a stable tie-break" {
            // Severities [2, 4, 2, 1] in insertion order
            let a = add_issue(&mut ws, 1, 2);
            let b = add_issue(&mut ws, 2, 4);
            let c = add_issue(&mut ws, 3, 2);
            let d = add_issue(&mut ws, 4, 1);

            let order: Vec<u32> = ws.issues_by_severity().iter().map(|i| i.id).collect();
            assert_eq!(order, vec![b, a, c, d]);
        }

        it "leaves the issue log itself in insertion order" {
            add_issue(&mut ws, 1, 0);
            add_issue(&mut ws, 2, 4);
            let ids: Vec<u32> = ws.issues.iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
    }

    describe "countdown deadline" {
        it "sets the deadline relative to now" {
            ws.start_countdown(60, 1_000_000);
            assert_eq!(ws.timer_end, Some(1_000_000 + 3_600_000));
        }

        it "replaces an existing countdown instead of stacking" {
            ws.start_countdown(90, 0);
            ws.start_countdown(5, 10_000);
            assert_eq!(ws.timer_end, Some(10_000 + 300_000));
        }
    }
}
