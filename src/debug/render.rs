use std::fmt::{self, Display, Write};

use super::services::DayView;

const STYLE: &str = "body { font-family: Arial, sans-serif; font-size: 13px; }\n\
    table { border-collapse: collapse; margin-bottom: 24px; }\n\
    th, td { border: 1px solid #ccc; padding: 4px 8px; }\n\
    th { background: #f0f0f0; }\n\
    h2 { margin-top: 24px; }";

/// Escape text for use inside HTML element content or quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Table cell text for an optional value; absent values render empty.
fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| escape(&v.to_string())).unwrap_or_default()
}

fn header_row(html: &mut String, titles: &[&str]) -> fmt::Result {
    html.push_str("<table><tr>");
    for t in titles {
        write!(html, "<th>{t}</th>")?;
    }
    html.push_str("</tr>");
    Ok(())
}

fn row(html: &mut String, cells: &[String]) -> fmt::Result {
    html.push_str("<tr>");
    for c in cells {
        write!(html, "<td>{c}</td>")?;
    }
    html.push_str("</tr>");
    Ok(())
}

pub fn day_page(day: &DayView) -> Result<String, fmt::Error> {
    let mut html = String::new();
    write!(
        html,
        "<html><head><meta charset='utf-8'><title>Spy Daily Debug</title><style>{STYLE}</style></head><body>"
    )?;
    write!(html, "<h1>Spy Daily Debug: User {}, Date {}</h1>", day.user_id, day.date)?;

    html.push_str("<h2>Daily Log</h2>");
    match &day.daily {
        Some(d) => {
            header_row(&mut html, &["Weight", "Calories In", "Training Calories", "Deficit", "Readiness", "Notes"])?;
            row(
                &mut html,
                &[
                    cell(d.body_weight_kg),
                    cell(d.calories_in_kcal),
                    cell(d.calories_out_training_kcal),
                    cell(d.calculated_deficit_kcal),
                    cell(d.readiness_state),
                    cell(d.notes_day.as_deref()),
                ],
            )?;
            html.push_str("</table>");
        }
        None => html.push_str("<p>No daily_log row.</p>"),
    }

    html.push_str("<h2>Weight Log</h2>");
    if day.weights.is_empty() {
        html.push_str("<p>No weight entries.</p>");
    } else {
        header_row(&mut html, &["DateTime", "Weight", "Source", "Note"])?;
        for w in &day.weights {
            row(
                &mut html,
                &[
                    escape(&w.date_time.to_string()),
                    w.weight_kg.to_string(),
                    cell(w.source.as_deref()),
                    cell(w.note.as_deref()),
                ],
            )?;
        }
        html.push_str("</table>");
    }

    html.push_str("<h2>Meals</h2>");
    if day.meals.is_empty() {
        html.push_str("<p>No meals.</p>");
    }
    for meal in &day.meals {
        write!(
            html,
            "<h3>{} {}</h3>",
            escape(&meal.meal_type),
            cell(meal.time.as_deref())
        )?;
        header_row(&mut html, &["Food", "Quantity (g)", "Protein", "Carbs", "Fat", "Kcal"])?;
        for item in &meal.items {
            row(
                &mut html,
                &[
                    escape(&item.food_name),
                    item.quantity_g.to_string(),
                    format!("{:.1}", item.macros.protein_g),
                    format!("{:.1}", item.macros.carbs_g),
                    format!("{:.1}", item.macros.fat_g),
                    format!("{:.0}", item.macros.kcal),
                ],
            )?;
        }
        let t = &meal.totals;
        write!(
            html,
            "<tr style='font-weight:bold;'><td>Total</td><td></td><td>{:.1}</td><td>{:.1}</td><td>{:.1}</td><td>{:.0}</td></tr></table>",
            t.protein_g, t.carbs_g, t.fat_g, t.kcal
        )?;
    }

    html.push_str("<h2>Training Sessions</h2>");
    if day.training.is_empty() {
        html.push_str("<p>No training sessions.</p>");
    } else {
        header_row(
            &mut html,
            &["Type", "Start", "End", "Dur", "Avg HR", "Max HR", "Kcal", "RPE", "Notes"],
        )?;
        for s in &day.training {
            row(
                &mut html,
                &[
                    escape(&s.kind),
                    cell(s.start_time.as_deref()),
                    cell(s.end_time.as_deref()),
                    cell(s.duration_min),
                    cell(s.avg_hr),
                    cell(s.max_hr),
                    cell(s.calories_kcal),
                    cell(s.rpe),
                    cell(s.notes.as_deref()),
                ],
            )?;
        }
        html.push_str("</table>");
    }

    html.push_str("<h2>Sleep Logs</h2>");
    if day.sleep.is_empty() {
        html.push_str("<p>No sleep logs.</p>");
    } else {
        header_row(&mut html, &["Duration", "Resting HR", "HRV", "Recharge", "Score", "Notes"])?;
        for s in &day.sleep {
            row(
                &mut html,
                &[
                    cell(s.sleep_duration_min),
                    cell(s.resting_hr),
                    cell(s.hrv_ms),
                    cell(s.recharge_status.as_deref()),
                    cell(s.sleep_score),
                    cell(s.notes.as_deref()),
                ],
            )?;
        }
        html.push_str("</table>");
    }

    html.push_str("<h2>ANS Logs</h2>");
    if day.ans.is_empty() {
        html.push_str("<p>No ANS logs.</p>");
    } else {
        header_row(&mut html, &["ANS Change", "Sleep Charge", "Source"])?;
        for a in &day.ans {
            row(
                &mut html,
                &[cell(a.ans_change), cell(a.sleep_charge_score), cell(a.source.as_deref())],
            )?;
        }
        html.push_str("</table>");
    }

    html.push_str("<h2>Daily Feel</h2>");
    if day.feel.is_empty() {
        html.push_str("<p>No daily_feel entries.</p>");
    } else {
        header_row(
            &mut html,
            &["Energy", "Fatigue", "Soreness", "Mood", "Performance", "Stress", "Notes"],
        )?;
        for f in &day.feel {
            row(
                &mut html,
                &[
                    cell(f.energy_1_10),
                    cell(f.fatigue_1_10),
                    cell(f.soreness_1_10),
                    cell(f.mood_1_10),
                    cell(f.performance_feeling_1_10),
                    cell(f.stress_1_10),
                    cell(f.notes.as_deref()),
                ],
            )?;
        }
        html.push_str("</table>");
    }

    html.push_str("<h2>Daily Targets</h2>");
    match &day.targets {
        Some(t) => {
            header_row(
                &mut html,
                &["Readiness", "P min", "P max", "Carbs", "Fat", "Kcal", "Training", "Recovery"],
            )?;
            row(
                &mut html,
                &[
                    cell(t.readiness_state),
                    cell(t.target_protein_min_g),
                    cell(t.target_protein_max_g),
                    cell(t.target_carbs_g),
                    cell(t.target_fat_g),
                    cell(t.target_calories_kcal),
                    cell(t.training_recommendation.as_deref()),
                    cell(t.recovery_recommendation.as_deref()),
                ],
            )?;
            html.push_str("</table>");
        }
        None => html.push_str("<p>No daily_targets.</p>"),
    }

    html.push_str("</body></html>");
    Ok(html)
}
