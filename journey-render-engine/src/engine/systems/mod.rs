pub mod fps_tracking;
