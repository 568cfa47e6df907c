/// Contact details entity module
pub mod contact_info;
/// Contact form message entity module
pub mod contact_message;
/// Event entity module
pub mod event;
/// Feedback entity module
pub mod feedback;
/// Project entity module
pub mod project;
/// Report document entity module
pub mod report;
/// Report/tag join entity module
pub mod report_tag;
/// Role permission set entity module
pub mod role_permission;
/// Site setting entity module
pub mod site_setting;
/// Report tag entity module
pub mod tag;
/// Team entity module
pub mod team;
/// Team membership entity module
pub mod team_member;
/// Team role entity module
pub mod team_role;
/// User entity module
pub mod user;
/// Visit schedule entity module
pub mod visit_schedule;
/// Volunteer application entity module
pub mod volunteer_application;
/// Volunteer form question entity module
pub mod volunteer_question;
/// Wish entity module
pub mod wish;

pub use contact_info::Entity as ContactInfo;
pub use contact_message::Entity as ContactMessage;
pub use event::Entity as Event;
pub use feedback::Entity as Feedback;
pub use project::Entity as Project;
pub use report::Entity as Report;
pub use report_tag::Entity as ReportTag;
pub use role_permission::Entity as RolePermission;
pub use site_setting::Entity as SiteSetting;
pub use tag::Entity as Tag;
pub use team::Entity as Team;
pub use team_member::Entity as TeamMember;
pub use team_role::Entity as TeamRole;
pub use user::Entity as User;
pub use visit_schedule::Entity as VisitSchedule;
pub use volunteer_application::Entity as VolunteerApplication;
pub use volunteer_question::Entity as VolunteerQuestion;
pub use wish::Entity as Wish;
