use crate::db::record_repo::LedgerTotals;
use crate::ledger::sentiment::SentimentSummary;
use crate::models::TaskRecord;

pub fn print_record(r: &TaskRecord) {
    println!("Task: {} ({})", r.title, r.id);
    if let Some(ref desc) = r.description {
        println!("  Description: {desc}");
    }
    println!("  Company: {}", r.company);
    println!("  Employee: {}", r.employee);
    println!("  Status: {}", r.status.as_str());
    println!("  Employee completion: {}%", r.employee_completion);
    if let Some(adjusted) = r.reviewer_completion {
        println!("  Reviewer completion: {adjusted}%");
    }
    println!("  Marks: {:.2}", r.marks);
    println!("  Approval: {}", r.client_approval.as_str());
    if let Some(ref comments) = r.comments {
        println!("  Comments: {comments}");
    }
    println!("  Created: {}", r.created_at);
}

pub fn print_record_list(records: &[TaskRecord]) {
    if records.is_empty() {
        println!("No task records found.");
        return;
    }
    for r in records {
        println!(
            "  [{}] {} ({}) by {} - {}% -> {:.2} marks{}",
            r.status.as_str(),
            r.title,
            &r.id[..std::cmp::min(8, r.id.len())],
            r.employee,
            r.effective_completion(),
            r.marks,
            if r.status.is_terminal() {
                format!(" [{}]", r.client_approval.as_str())
            } else {
                String::new()
            }
        );
    }
}

pub fn print_totals(t: &LedgerTotals) {
    println!(
        "Records: {} (submitted={} reviewed={} completed={})",
        t.total, t.submitted, t.reviewed, t.completed
    );
    println!("  approved={} rejected={}", t.approved, t.rejected);
    println!(
        "  total marks: {:.2}, average: {:.2}",
        t.total_marks, t.average_marks
    );
}

pub fn print_sentiment(s: &SentimentSummary) {
    println!(
        "Reviewer comment sentiment: positive={} negative={} neutral={}",
        s.positive, s.negative, s.neutral
    );
}
