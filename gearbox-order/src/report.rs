use gearbox_catalog::Part;
use rust_decimal::Decimal;

use crate::models::{Order, OrderLine, OrderReport, ReportLine};

/// Timestamp layout used on order reports.
const REPORT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Project an order and its resolved lines into the report shape.
///
/// The projection reads whatever lines the order has right now and takes
/// the total from the stored order row, so a total that has not been
/// recomputed after a line change shows up stale here.
pub fn build_report(order: &Order, lines: &[(OrderLine, Part)]) -> OrderReport {
    let lines = lines
        .iter()
        .map(|(line, part)| ReportLine {
            part_name: part.name.clone(),
            quantity: line.quantity,
            unit_price: part.price,
            subtotal: part.price * Decimal::from(line.quantity),
        })
        .collect();

    OrderReport {
        order_id: order.public_id,
        created_at: order.created_at.format(REPORT_DATE_FORMAT).to_string(),
        lines,
        total: order.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn order_at(total: Decimal, year: i32, month: u32, day: u32, hour: u32, min: u32) -> Order {
        Order {
            id: 1,
            public_id: Uuid::new_v4(),
            total,
            created_at: Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap(),
        }
    }

    fn line_with_part(quantity: i64, name: &str, price: Decimal) -> (OrderLine, Part) {
        (
            OrderLine {
                id: 1,
                order_id: 1,
                part_id: 7,
                quantity,
            },
            Part {
                id: 7,
                name: name.to_string(),
                price,
                owner: None,
            },
        )
    }

    #[test]
    fn test_report_formats_day_month_year_timestamps() {
        let order = order_at(Decimal::ZERO, 2024, 3, 7, 14, 5);
        let report = build_report(&order, &[]);
        assert_eq!(report.created_at, "07/03/2024 14:05");
    }

    #[test]
    fn test_report_derives_line_subtotals_from_live_prices() {
        let order = order_at(Decimal::new(11650, 2), 2024, 1, 10, 9, 30);
        let lines = vec![
            line_with_part(2, "Brake Pads", Decimal::new(4575, 2)),
            line_with_part(1, "Engine Oil 5W30", Decimal::new(2500, 2)),
        ];

        let report = build_report(&order, &lines);

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].part_name, "Brake Pads");
        assert_eq!(report.lines[0].quantity, 2);
        assert_eq!(report.lines[0].unit_price, Decimal::new(4575, 2));
        assert_eq!(report.lines[0].subtotal, Decimal::new(9150, 2));
        assert_eq!(report.lines[1].subtotal, Decimal::new(2500, 2));
    }

    #[test]
    fn test_report_total_comes_from_the_stored_order() {
        // a stale stored total is reported as-is, recomputation is a
        // separate explicit operation
        let order = order_at(Decimal::new(99900, 2), 2023, 12, 24, 23, 59);
        let lines = vec![line_with_part(1, "Spark Plug", Decimal::new(1890, 2))];

        let report = build_report(&order, &lines);

        assert_eq!(report.total, Decimal::new(99900, 2));
        assert_eq!(report.order_id, order.public_id);
    }
}
