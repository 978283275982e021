/// Automated-station equipment status remarks. `Dollar` additionally sets
/// [`Remarks::maintenance_required`](super::Remarks::maintenance_required)
/// on the enclosing record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaintenanceIndicator {
    /// `RVRNO` — runway visual range data not available.
    Rvrno,
    /// `PWINO` — precipitation identifier sensor not available.
    Pwino,
    /// `PNO` — precipitation amount sensor not available.
    Pno,
    /// `FZRANO` — freezing rain sensor not available.
    Fzrano,
    /// `TSNO` — thunderstorm sensor not available.
    Tsno,
    /// `VISNO <loc>` — visibility sensor not available at `<loc>`.
    Visno(String),
    /// `CHINO <loc>` — sky condition sensor not available at `<loc>`.
    Chino(String),
    /// `$` — station requires maintenance.
    Dollar,
}
