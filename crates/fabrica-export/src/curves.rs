//! Load-curve translator: the `LoadData` section.

use fabrica_model::Problem;
use fabrica_types::FabricaResult;

use crate::names;
use crate::table::IdTable;
use crate::xml::XmlElement;

/// Builds the `LoadData` section: one `loadcurve` per reachable curve
/// with its points emitted sorted by time.
pub(crate) fn load_data_section(problem: &Problem, table: &IdTable) -> FabricaResult<XmlElement> {
    let mut section = XmlElement::new("LoadData");
    for &id in table.curves() {
        let curve = problem.curve(id);
        let mut el = XmlElement::new("loadcurve")
            .with_attr("id", table.require_curve(id)?.to_string())
            .with_attr("type", names::interpolation_name(curve.interpolation))
            .with_attr("extend", names::extrapolation_name(curve.extrapolation));
        for (time, value) in &curve.points {
            el.push(XmlElement::new("loadpoint").with_text(format!("{},{}", time, value)));
        }
        section.push(el);
    }
    Ok(section)
}
