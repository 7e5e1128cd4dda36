mod concrete_scenario;
mod partition;
mod perpendicular;
