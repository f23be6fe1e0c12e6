//! Flat CSV projection of the ledger for reporting. Read-only; column order
//! is stable for downstream consumers. Ends with a synthetic Total row
//! summing marks.

use crate::models::TaskRecord;

const HEADER: &str = "id,company,employee,task,description,employeeCompletion,\
reviewerCompletion,marks,status,clientApproval,comments,createdAt";

pub fn render(records: &[TaskRecord]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    let mut total_marks = 0.0;
    for r in records {
        total_marks += r.marks;
        let fields = [
            r.id.clone(),
            r.company.clone(),
            r.employee.clone(),
            r.title.clone(),
            r.description.clone().unwrap_or_default(),
            r.employee_completion.to_string(),
            r.reviewer_completion
                .map(|c| c.to_string())
                .unwrap_or_default(),
            format!("{:.2}", r.marks),
            r.status.as_str().to_string(),
            r.client_approval.as_str().to_string(),
            r.comments.clone().unwrap_or_default(),
            r.created_at.clone(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out.push_str(&format!("Total,,,,,,,{total_marks:.2},,,,\n"));
    out
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Approval, RecordStatus};

    fn record(title: &str, marks: f64) -> TaskRecord {
        TaskRecord {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".into(),
            company: "Acme".into(),
            employee: "Alice".into(),
            title: title.into(),
            description: Some("desc".into()),
            employee_completion: 40,
            reviewer_completion: Some(80),
            marks,
            status: RecordStatus::Reviewed,
            client_approval: Approval::Pending,
            comments: Some("good".into()),
            created_at: "2026-01-01T00:00:00Z".into(),
            updated_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_header_and_total_row() {
        let csv = render(&[record("Deploy", 4.0), record("Docs", 2.5)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id,company,employee,task"));
        assert_eq!(lines[3], "Total,,,,,,,6.50,,,,");
    }

    #[test]
    fn test_empty_ledger_still_has_total() {
        let csv = render(&[]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Total,,,,,,,0.00,,,,");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let csv = render(&[record("Deploy, then verify", 4.0)]);
        assert!(csv.contains("\"Deploy, then verify\""));
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_line_breaks_are_quoted() {
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape("carriage\rreturn"), "\"carriage\rreturn\"");
    }
}
