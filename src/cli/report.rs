//! 调研结果的终端报告

use std::fmt::Write;

use crate::types::{CompanyInfo, ResearchState};

/// 格式化最终调研结果
pub fn format_report(state: &ResearchState) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "\n📊 Results for: {}", state.query);
    let _ = writeln!(report, "{}", "=".repeat(60));

    for (i, company) in state.companies.iter().enumerate() {
        write_company(&mut report, i + 1, company);
    }

    if let Some(analysis) = &state.analysis {
        let _ = writeln!(report, "Developer Recommendations:");
        let _ = writeln!(report, "{}", "-".repeat(40));
        let _ = writeln!(report, "{}", analysis);
    }

    report
}

fn write_company(report: &mut String, index: usize, company: &CompanyInfo) {
    let pricing = company
        .pricing_model
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let _ = writeln!(report, "\n{}. 🏢 {}", index, company.name);
    let _ = writeln!(report, "   🌐 Website: {}", company.website);
    let _ = writeln!(report, "   💰 Pricing: {}", pricing);
    let _ = writeln!(
        report,
        "   📖 Open Source: {}",
        tri_state(company.is_open_source)
    );

    if !company.tech_stack.is_empty() {
        let _ = writeln!(report, "   🛠️  Tech Stack: {}", join_first(&company.tech_stack, 5));
    }

    if !company.language_support.is_empty() {
        let _ = writeln!(
            report,
            "   💻 Language Support: {}",
            join_first(&company.language_support, 5)
        );
    }

    if let Some(api_available) = company.api_available {
        let api_status = if api_available {
            "✅ Available"
        } else {
            "❌ Not Available"
        };
        let _ = writeln!(report, "   🔌 API: {}", api_status);
    }

    if !company.integration_capabilities.is_empty() {
        let _ = writeln!(
            report,
            "   🔗 Integrations: {}",
            join_first(&company.integration_capabilities, 4)
        );
    }

    if !company.description.is_empty() && company.description != "Analysis failed" {
        let _ = writeln!(report, "   📝 Description: {}", company.description);
    }

    report.push('\n');
}

fn tri_state(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "Unknown",
    }
}

fn join_first(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
