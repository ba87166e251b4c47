/// Router Module Index
///
/// Routing is organized into security-segregated modules: one public module
/// and one module per protected section. Each protected module exports its
/// router *and* its `SectionGuard` configuration pair; the two are joined in
/// `create_router` with a `route_layer`, so a section cannot exist without
/// its guard being stated next to it.

/// Routes accessible to any caller: health, the root entry point, and the
/// notice pages the guards redirect to.
pub mod public;

/// Platform administration. Allow-list: super_admin.
pub mod admin;

/// Agency dashboard. Allow-list: agency_admin, agent.
pub mod agency;

/// Employer dashboard, plus the nested staff-management area with its own
/// tighter guard.
pub mod employer;

/// Employee self-service. Allow-list: employee.
pub mod employee;

/// The recruiting feature area. Uses the recruiting role vocabulary and
/// registry; entirely disjoint from the workforce sections above.
pub mod recruiting;
